//! Headless driver that spins a random point cloud around an axis using `cl3`
//! rotors and prints the projected positions of each frame.

mod cli;
mod cloud;
mod output;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install().expect("error initializing panic handler");

    cli::exec(args)
}
