use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[cfg(feature = "unstable-dynamic")]
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate, ValueCompleter};

#[derive(Parser, Debug)]
#[command(name = "tocgen")]
#[command(version)]
#[command(about = "Generate a help-viewer table of contents from markdown documents")]
#[command(
    long_about = "tocgen - Builds a toc.xml descriptor from a directory of markdown documents.\n\n\
    Every document becomes a topic, its headings become nested topics, and documents\n\
    are grouped by the `part:` field of their front matter. The title is read from\n\
    the `part:` field of index.md, which must exist in the source directory.\n\n\
    The optional argument [DIRECTORY] must point to a relative or absolute file\n\
    system directory in which the source files are searched. The default is to\n\
    search the current directory. The output is always generated in a subdirectory\n\
    named \"contents\" in the current directory.\n\n\
    Examples:\n  \
    tocgen                    # Use the current directory\n  \
    tocgen docs               # Read docs/*.md, write contents/toc.xml\n  \
    tocgen docs --stdout      # Print the descriptor instead\n  \
    tocgen docs --max-level 2 # Only two heading levels"
)]
pub struct Cli {
    /// Directory containing the markdown sources (default: current directory)
    #[arg(add = directory_completer())]
    pub directory: Option<PathBuf>,

    /// Directory the descriptor is written to
    ///
    /// Overrides `output_dir` from the config file.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Deepest heading level that becomes a topic
    ///
    /// Overrides `max_level` from the config file.
    #[arg(long = "max-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(1..))]
    pub max_level: Option<u8>,

    /// Write the descriptor to stdout instead of the output file
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Single arguments treated as a request for usage help.
const HELP_ALIASES: [&str; 5] = ["h", "-h", "help", "-help", "--help"];

/// True if the raw arguments (without the program name) ask for usage help.
///
/// Bare `h`, `help` and `-help` are accepted alongside the usual flags so
/// they are not mistaken for a directory name. Arguments that are not valid
/// Unicode are never help requests.
pub fn is_help_requested(args: &[OsString]) -> bool {
    match args {
        [single] => single
            .to_str()
            .is_some_and(|arg| HELP_ALIASES.contains(&arg)),
        _ => false,
    }
}

#[cfg(feature = "unstable-dynamic")]
fn directory_completer() -> ArgValueCompleter {
    use std::ffi::OsStr;
    use std::path::Path;

    struct DirectoryCompleter;

    impl ValueCompleter for DirectoryCompleter {
        fn complete(&self, current: &OsStr) -> Vec<CompletionCandidate> {
            // "docs/gu" lists "docs/" and keeps entries starting with "gu"
            let current = current.to_string_lossy();
            let (base, prefix) = match current.rfind(['/', '\\']) {
                Some(idx) => current.split_at(idx + 1),
                None => ("", current.as_ref()),
            };
            let search_dir = if base.is_empty() { Path::new(".") } else { Path::new(base) };

            let Ok(entries) = std::fs::read_dir(search_dir) else {
                return vec![];
            };

            entries
                .filter_map(Result::ok)
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| {
                    let name = entry.file_name().into_string().ok()?;
                    name.starts_with(prefix)
                        .then(|| CompletionCandidate::new(format!("{}{}/", base, name)))
                })
                .collect()
        }
    }

    ArgValueCompleter::new(DirectoryCompleter)
}

#[cfg(not(feature = "unstable-dynamic"))]
fn directory_completer() -> clap::builder::ValueHint {
    clap::ValueHint::DirPath
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_aliases() {
        for alias in HELP_ALIASES {
            assert!(is_help_requested(&args(&[alias])), "{}", alias);
        }
        assert!(!is_help_requested(&args(&[])));
        assert!(!is_help_requested(&args(&["docs"])));
        assert!(!is_help_requested(&args(&["docs", "help"])));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_directory() {
        use std::os::unix::ffi::OsStringExt;

        let dir = OsString::from_vec(b"d\xff".to_vec());
        assert!(!is_help_requested(std::slice::from_ref(&dir)));

        let cli = Cli::try_parse_from([OsString::from("tocgen"), dir.clone()]).unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from(dir)));
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["tocgen"]).unwrap();
        assert!(cli.directory.is_none());
        assert!(!cli.stdout);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_options() {
        let cli =
            Cli::try_parse_from(["tocgen", "docs", "-o", "out", "--max-level", "2", "-vv"])
                .unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("docs")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.max_level, Some(2));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_second_directory() {
        assert!(Cli::try_parse_from(["tocgen", "docs", "more"]).is_err());
        assert!(Cli::try_parse_from(["tocgen", "--max-level", "0"]).is_err());
    }
}
