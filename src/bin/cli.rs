// src/bin/cli.rs
use clap::Parser;
use ecb_scrape::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    ecb_scrape::log::init(args.verbose);

    let summary = cli::run(&args)?;
    println!("{summary}");
    Ok(())
}
