//! # tocgen
//!
//! Generates a help-viewer table of contents (`contents/toc.xml`) from a
//! directory of markdown documents.
//!
//! ## Usage
//!
//! Use the current directory:
//! ```sh
//! tocgen
//! ```
//!
//! Read another directory and print the result:
//! ```sh
//! tocgen docs --stdout
//! ```

mod cli;

use clap::{CommandFactory, Parser as ClapParser};
use cli::Cli;
use color_eyre::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;
use tocgen::{Config, TocError, TocGenerator};

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let raw: Vec<OsString> = std::env::args_os().skip(1).collect();
    if cli::is_help_requested(&raw) {
        print_usage();
        process::exit(1);
    }

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayVersion => {
                print!("{}", e);
                return Ok(());
            }
            clap::error::ErrorKind::DisplayHelp => {
                print_usage();
                process::exit(1);
            }
            _ => {
                eprint!("{}", e);
                process::exit(1);
            }
        },
    };

    tocgen::logging::init(args.verbose);

    let mut config = Config::load().generator;
    if let Some(ref dir) = args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(level) = args.max_level {
        config.max_level = usize::from(level);
    }

    let source_dir = args.directory.clone().unwrap_or_else(|| PathBuf::from("."));
    let generator = TocGenerator::new(config);

    match run(&generator, &source_dir, args.stdout) {
        Ok(()) => Ok(()),
        Err(e) if e.is_configuration() => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn run(generator: &TocGenerator, source_dir: &Path, to_stdout: bool) -> Result<(), TocError> {
    if to_stdout {
        let stdout = std::io::stdout();
        generator.generate_to(source_dir, stdout.lock())?;
    } else {
        generator.generate(source_dir)?;
    }
    Ok(())
}

fn print_usage() {
    let help = Cli::command().render_long_help();
    eprintln!("{}", help);
}
