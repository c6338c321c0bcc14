use anyhow::Result;
use clap::Parser;
use placeholder_icons::icon_gen;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "create-icons",
    about = "Generate the 16, 48 and 128 pixel placeholder icons"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    icon_gen::generate_icons(&icon_gen::Args {
        output: args.output,
    })
}
