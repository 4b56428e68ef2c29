use clap::Parser;

use funcomb::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let output = cli::run(args)?;
    println!("{output}");

    Ok(())
}
