//! xtask - Build tasks for termtint
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use termtint::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for termtint")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate all
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn render_man(cmd: &Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(&cmd, &man_dir.join("termtint.1"))?;

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let file = format!("termtint-{}.1", subcommand.get_name());
        render_man(subcommand, &man_dir.join(file))?;
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(arg.get_id().as_str(), "help" | "version")
}

/// Append an argument list entry per non-builtin argument.
fn describe_args(markdown: &mut String, cmd: &Command) {
    let args: Vec<_> = cmd.get_arguments().filter(|a| !is_builtin(a)).collect();

    let positional: Vec<_> = args.iter().filter(|a| a.is_positional()).collect();
    if !positional.is_empty() {
        markdown.push_str("### Arguments\n\n");
        for arg in positional {
            let _ = write!(markdown, "- `<{}>`", arg.get_id().as_str().to_uppercase());
            if let Some(help) = arg.get_help() {
                let _ = write!(markdown, ": {}", help);
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    let options: Vec<_> = args.iter().filter(|a| !a.is_positional()).collect();
    if !options.is_empty() {
        markdown.push_str("### Options\n\n");
        for arg in options {
            let flag = match (arg.get_short(), arg.get_long()) {
                (Some(s), Some(l)) => format!("-{}, --{}", s, l),
                (None, Some(l)) => format!("--{}", l),
                (Some(s), None) => format!("-{}", s),
                (None, None) => continue,
            };
            let _ = write!(markdown, "- `{}`", flag);
            if let Some(help) = arg.get_help() {
                let _ = write!(markdown, ": {}", help);
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let subcommands: Vec<_> = cmd.get_subcommands().filter(|c| !c.is_hide_set()).collect();
    let mut markdown = String::new();

    markdown.push_str("# termtint Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in &subcommands {
        let name = subcommand.get_name();
        let _ = writeln!(markdown, "- [{}](#termtint-{})", name, name);
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## termtint\n\n");
    if let Some(long_about) = cmd.get_long_about().or(cmd.get_about()) {
        let _ = write!(markdown, "```\n{}\n```\n\n", long_about);
    }
    describe_args(&mut markdown, &cmd);

    for subcommand in subcommands {
        let _ = write!(markdown, "## termtint {}\n\n", subcommand.get_name());
        if let Some(about) = subcommand.get_about() {
            let _ = write!(markdown, "{}\n\n", about);
        }
        describe_args(&mut markdown, subcommand);
        if let Some(long_about) = subcommand.get_long_about() {
            let _ = write!(markdown, "### Description\n\n```\n{}\n```\n\n", long_about);
        }
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).context("Failed to write COMMANDS.md")?;
    println!("Generated: {}", path.display());
    Ok(())
}
