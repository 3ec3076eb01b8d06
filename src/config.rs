use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Log level when neither `RUST_LOG` nor `--verbose` says otherwise.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Simulate robots exploring a rectangular grid.
///
/// Logs go to stderr and honour RUST_LOG.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "martian-robots", author, version, about)]
pub struct Args {
    /// Input file (default: stdin, also `-`)
    pub input: Option<PathBuf>,

    /// Log robot movements (repeat for every instruction)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the final grid to stderr, scented cells `#`
    #[arg(long)]
    pub show_world: bool,
}

impl Args {
    /// Input file to read, `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    /// Level requested on the command line, if any.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("martian-robots").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_stdin() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.input_path(), None);
        assert_eq!(args.log_level(), None);
        assert!(!args.show_world);
    }

    #[test]
    fn reads_flags_and_input() {
        let args = parse(&["-v", "robots.txt", "--show-world", "-v"]).unwrap();
        assert_eq!(args.input_path(), Some(Path::new("robots.txt")));
        assert!(args.show_world);
        assert_eq!(args.log_level(), Some(LevelFilter::Trace));

        assert_eq!(parse(&["-vv"]).unwrap().log_level(), Some(LevelFilter::Trace));
        assert_eq!(parse(&["--verbose"]).unwrap().log_level(), Some(LevelFilter::Debug));
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(parse(&["-"]).unwrap().input_path(), None);
    }

    #[test]
    fn rejects_unknown_flags_and_extra_inputs() {
        assert_eq!(
            parse(&["--fast"]).unwrap_err().kind(),
            clap::error::ErrorKind::UnknownArgument
        );
        assert!(parse(&["a.txt", "b.txt"]).is_err());
        assert!(parse(&["-", "-"]).is_err());
    }
}
