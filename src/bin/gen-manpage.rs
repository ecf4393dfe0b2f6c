//! Man page generator for norprog
//!
//! Writes `norprog.1` plus one `norprog-<command>.1` page per subcommand.
//!
//! Usage: cargo run --bin gen-manpage -- [--single] [output-dir]

use clap::{Command, CommandFactory, Parser};
use std::fs;
use std::path::PathBuf;

#[path = "../cli.rs"]
mod cli;

#[derive(Parser)]
#[command(name = "gen-manpage", about = "Render norprog man pages")]
struct Args {
    /// Directory the pages are written to
    #[arg(default_value = "man")]
    output_dir: PathBuf,

    /// Only write the top-level page
    #[arg(long)]
    single: bool,
}

/// File name and command for every page to render
///
/// `cmd` is built first so subcommands carry their full `norprog <name>`
/// invocation in the synopsis. Hidden commands such as `help` are skipped.
fn pages(mut cmd: Command, single: bool) -> Vec<(String, Command)> {
    cmd.build();
    let mut out = Vec::new();
    if !single {
        for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
            if sub.get_name() == "help" {
                continue;
            }
            let file = format!("{}-{}.1", cmd.get_name(), sub.get_name());
            out.push((file, sub.clone()));
        }
    }
    out.insert(0, (format!("{}.1", cmd.get_name()), cmd));
    out
}

fn render(cmd: Command) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).section("1").render(&mut buffer)?;
    Ok(buffer)
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.output_dir)?;

    let pages = pages(cli::Cli::command(), args.single);
    let count = pages.len();
    let mut first = None;
    for (file, cmd) in pages {
        let path = args.output_dir.join(&file);
        fs::write(&path, render(cmd)?)?;
        println!("Wrote {}", path.display());
        first.get_or_insert(path);
    }

    println!("\nGenerated {} man page(s)", count);
    if let Some(path) = first {
        println!("To view the main page:");
        println!("  man -l {}", path.display());
    }

    Ok(())
}
