use std::fs;
use std::io::Write;
use std::path::Path;

const TEMPLATE: &str = r#"use clap::Parser;

#[derive(Debug, clap::Parser)]
enum Args {
    /// Day 1 part 1
    Part1 { file: String },
    /// Day 1 part 2
    Part2 { file: String },
}

fn parse_file(filename: &str) -> anyhow::Result<String> {
    let mut file = std::fs::File::open(filename)?;
    todo!()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args {
        Args::Part1 { file } => {
            let output = parse_file(&file)?;

            todo!();
            Ok(())
        }

        Args::Part2 { file } => {
            let output = parse_file(&file)?;

            todo!();
            Ok(())
        }
    }
}
"#;

fn label(day: u32) -> String {
    format!("{:02}", day)
}

fn stanza(day: u32) -> String {
    let label = label(day);
    format!("\n[[bin]]\nname = \"day{label}\"\npath = \"src/bin/day{label}.rs\"\n")
}

/// Registers `day<LL>` as a bin target in the manifest under `root` and drops
/// the solution skeleton at `src/bin/day<LL>.rs`. The two writes are
/// independent; a failed skeleton write leaves the manifest appended.
pub fn new_day(root: &Path, day: u32) -> anyhow::Result<()> {
    // append only, never create: a project without a Cargo.toml is not ours to fix
    let mut manifest = fs::OpenOptions::new()
        .append(true)
        .open(root.join("Cargo.toml"))?;
    manifest.write_all(stanza(day).as_bytes())?;

    fs::write(root.join(format!("src/bin/day{}.rs", label(day))), TEMPLATE)?;
    Ok(())
}
