use std::{num::ParseIntError, path::PathBuf, time::Duration};

use sparselife::{Pattern, parse_iterations};
use thiserror::Error;

const USAGE_BRIEF: &str = "usage: sparselife [options] PATTERN ITERATIONS\n       \
                           sparselife [options] --input FILE ITERATIONS";

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("help requested")]
    Help,
    #[error(transparent)]
    Options(#[from] getopts::Fail),
    #[error("missing pattern name")]
    MissingPattern,
    #[error("missing iteration count")]
    MissingIterations,
    #[error("unexpected argument: {0}")]
    Unexpected(String),
    #[error("invalid sleep duration: {0}")]
    Sleep(ParseIntError),
    #[error(transparent)]
    Invalid(#[from] sparselife::Error),
}

/// Where the starting generation comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Named(Pattern),
    Rle(PathBuf),
}

pub struct Args {
    matches: getopts::Matches,
    source: Source,
    iterations: usize,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("a", "animate", "redraw each generation in place");
        opts.optflag("t", "threads", "enables multi-threading");
        opts.optopt("o", "output", "write the last generation as RLE", "FILE");
        opts.optopt("i", "input", "read the starting pattern from RLE", "FILE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    pub fn usage() -> String {
        let patterns = format!("patterns: {}", Pattern::valid_names());
        format!("{}\n{}", Self::options().usage(USAGE_BRIEF), patterns)
    }

    fn new<T: AsRef<str>>(args: &[T]) -> Result<Self, ArgsError> {
        let matches = Self::options().parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            return Err(ArgsError::Help);
        }

        let mut free = matches.free.iter();
        let source = match matches.opt_str("input") {
            Some(file) => Source::Rle(file.into()),
            None => Source::Named(free.next().ok_or(ArgsError::MissingPattern)?.parse()?),
        };
        let iterations = parse_iterations(free.next().ok_or(ArgsError::MissingIterations)?)?;
        if let Some(extra) = free.next() {
            return Err(ArgsError::Unexpected(extra.clone()));
        }

        let args = Self {
            matches,
            source,
            iterations,
        };
        // surface a bad sleep value now rather than mid-run
        args.matches
            .opt_get::<u64>("sleep")
            .map_err(ArgsError::Sleep)?;
        Ok(args)
    }
    pub fn from_env() -> Result<Self, ArgsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn source(&self) -> &Source {
        &self.source
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn animate(&self) -> bool {
        self.matches.opt_present("animate")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    pub fn sleep(&self) -> Option<Duration> {
        match self.matches.opt_get::<u64>("sleep").ok().flatten() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.animate() => Some(Duration::from_millis(100)),
            None => None,
        }
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_pattern_and_count() {
        let args = Args::new(&["rpentomino", "50"]).expect("valid args");

        assert_eq!(args.source(), &Source::Named(Pattern::RPentomino));
        assert_eq!(args.iterations(), 50);
        assert!(!args.animate());
        assert_eq!(args.sleep(), None);
    }

    #[test]
    fn input_file_replaces_pattern() {
        let args = Args::new(&["--input", "gun.rle", "3"]).expect("valid args");

        assert_eq!(args.source(), &Source::Rle("gun.rle".into()));
        assert_eq!(args.iterations(), 3);
    }

    #[test]
    fn animate_sleeps_by_default() {
        let args = Args::new(&["-a", "glider", "4"]).expect("valid args");

        assert_eq!(args.sleep(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn explicit_sleep() {
        let args = Args::new(&["--sleep", "20", "-t", "square", "1"]).expect("valid args");

        assert_eq!(args.sleep(), Some(Duration::from_millis(20)));
        assert!(args.multithreading());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(Args::new(&["--help"]), Err(ArgsError::Help)));
        assert!(matches!(
            Args::new::<&str>(&[]),
            Err(ArgsError::MissingPattern)
        ));
        assert!(matches!(
            Args::new(&["glider"]),
            Err(ArgsError::MissingIterations)
        ));
        assert!(matches!(
            Args::new(&["blinker", "3"]),
            Err(ArgsError::Invalid(sparselife::Error::InvalidPattern { .. }))
        ));
        assert!(matches!(
            Args::new(&["glider", "-3"]),
            Err(ArgsError::Options(_)) | Err(ArgsError::Invalid(_))
        ));
        assert!(matches!(
            Args::new(&["glider", "many"]),
            Err(ArgsError::Invalid(sparselife::Error::InvalidIterationCount(_)))
        ));
        assert!(matches!(
            Args::new(&["glider", "3", "4"]),
            Err(ArgsError::Unexpected(_))
        ));
        assert!(matches!(
            Args::new(&["--sleep", "soon", "glider", "3"]),
            Err(ArgsError::Sleep(_))
        ));
    }

    #[test]
    fn usage_lists_patterns() {
        assert!(Args::usage().contains("glider, rpentomino, square"));
    }
}
