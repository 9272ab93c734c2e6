use std::{path::PathBuf, str::FromStr};

use clap::Parser;

use portfolio_site::builder::{build, Context};

#[derive(Parser, Debug)]
#[command(name = "Portfolio Site Builder")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(default_value = ".")]
    path: String,
    #[arg(default_value = "public")]
    output_dir: String,
    #[arg(short, long)]
    local: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("running with {args:?}");

    let home = PathBuf::from_str(&args.path)?;
    let output_dir = home.join(&args.output_dir);

    let context = Context::new(home, output_dir, args.local)?;

    build(&context)
}
