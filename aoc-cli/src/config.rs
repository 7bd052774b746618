//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::inputs::InputSource;
use aoc_solver::Limits;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Where puzzle inputs come from
    pub inputs: InputSource,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Ceilings handed to every solver at parse time
    pub limits: Limits,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let inputs = if args.inputs.is_empty() {
            InputSource::Directory(expand_tilde(&args.input_dir))
        } else if args.day.is_none() {
            return Err(CliError::Config(
                "explicit input files require --day".to_string(),
            ));
        } else {
            InputSource::Files(args.inputs.iter().map(|p| expand_tilde(p)).collect())
        };

        if args.threads == Some(0) {
            return Err(CliError::Config("--threads must be at least 1".to_string()));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            inputs,
            thread_count: args.threads.unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            limits: Limits::new(args.max_iterations, args.max_candidates),
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(std::iter::once("aoc").chain(args.iter().copied())).unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = config(&["--input-dir", "puzzles"]).unwrap();
        assert_eq!(config.parallelize_by, ParallelizeBy::Sequential);
        assert_eq!(config.limits, Limits::default());
        assert!(matches!(config.inputs, InputSource::Directory(ref dir) if dir == Path::new("puzzles")));
        assert!(config.thread_count >= 1);
    }

    #[test]
    fn test_limits_from_flags() {
        let config = config(&["--max-iterations", "10", "--max-candidates", "20"]).unwrap();
        assert_eq!(config.limits, Limits::new(10, 20));
    }

    #[test]
    fn test_explicit_files() {
        let config = config(&["-d", "6", "a.txt", "b.txt"]).unwrap();
        match config.inputs {
            InputSource::Files(files) => assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]),
            InputSource::Directory(_) => panic!("expected explicit files"),
        }
    }

    #[test]
    fn test_files_require_day() {
        assert!(Args::try_parse_from(["aoc", "a.txt"]).is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(config(&["--threads", "0"]), Err(CliError::Config(_))));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
    }
}
