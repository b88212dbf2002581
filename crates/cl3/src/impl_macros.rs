/// Implements binary operators on references to a `Copy` type by forwarding to
/// the by-value implementation.
macro_rules! impl_forward_bin_ops_to_value {
    () => {};

    (
        impl $trait:ident for $type:ty { fn $func:ident() }
        $($remainder:tt)*
    ) => {
        impl_forward_bin_ops_to_value! {
            impl $trait<$type> for $type { fn $func() -> $type }
            $($remainder)*
        }
    };

    (
        impl $trait:ident<$rhs:ty> for $type:ty { fn $func:ident() -> $ret:ty }
        $($remainder:tt)*
    ) => {
        impl<'a> $trait<$rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(*self, rhs)
            }
        }
        impl<'a> $trait<&'a $rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: &'a $rhs) -> $ret {
                $trait::$func(self, *rhs)
            }
        }
        impl<'a, 'b> $trait<&'b $rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: &'b $rhs) -> $ret {
                $trait::$func(*self, *rhs)
            }
        }
        impl_forward_bin_ops_to_value! { $($remainder)* }
    };
}

/// Implements compound assignment operators in terms of the corresponding
/// binary operator, for both owned and borrowed right-hand sides.
macro_rules! impl_assign_ops_via_bin_ops {
    () => {};

    (
        impl $assign_trait:ident<$rhs:ty> for $type:ty {
            fn $assign_func:ident() => $func:ident
        }
        $($remainder:tt)*
    ) => {
        impl $assign_trait<$rhs> for $type {
            fn $assign_func(&mut self, rhs: $rhs) {
                *self = (*self).$func(rhs);
            }
        }
        impl<'a> $assign_trait<&'a $rhs> for $type {
            fn $assign_func(&mut self, rhs: &'a $rhs) {
                *self = (*self).$func(*rhs);
            }
        }
        impl_assign_ops_via_bin_ops! { $($remainder)* }
    };
}
