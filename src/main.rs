use clap::Parser;
use std::path::Path;

mod scaffold;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Challenge Day
    day: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    scaffold::new_day(Path::new("."), cli.day)
}
