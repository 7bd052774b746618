//! Puzzle input discovery
//!
//! Inputs live either in a directory as `{dir}/{year}_day{DD}.txt` or in
//! explicit files given on the command line.

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Where puzzle inputs are read from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// One file per year/day inside a directory
    Directory(PathBuf),
    /// The same files for every selected solver, joined with a blank line
    Files(Vec<PathBuf>),
}

impl InputSource {
    /// Path of the input file for a year/day inside `dir`
    pub fn input_path(dir: &Path, year: u16, day: u8) -> PathBuf {
        dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Paths that must exist for a year/day
    pub fn paths(&self, year: u16, day: u8) -> Vec<PathBuf> {
        match self {
            Self::Directory(dir) => vec![Self::input_path(dir, year, day)],
            Self::Files(files) => files.clone(),
        }
    }

    /// Check if every file needed for a year/day exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.paths(year, day).iter().all(|path| path.is_file())
    }

    /// Read the input text for a year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let texts = self
            .paths(year, day)
            .into_iter()
            .map(|path| read_input(year, day, path))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match texts.as_slice() {
            [single] => single.clone(),
            _ => texts
                .iter()
                .map(|text| text.trim_end_matches(['\r', '\n']))
                .collect::<Vec<_>>()
                .join("\n\n"),
        })
    }
}

fn read_input(year: u16, day: u8, path: PathBuf) -> Result<String, InputError> {
    if !path.is_file() {
        return Err(InputError::Missing { year, day, path });
    }
    fs::read_to_string(&path).map_err(|source| InputError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let path = InputSource::input_path(Path::new("inputs"), 2015, 6);
        assert_eq!(path, PathBuf::from("inputs/2015_day06.txt"));

        let path = InputSource::input_path(Path::new("inputs"), 2015, 25);
        assert!(path.to_string_lossy().ends_with("2015_day25.txt"));
    }

    #[test]
    fn test_directory_lookup() {
        let temp = TempDir::new().unwrap();
        let source = InputSource::Directory(temp.path().to_path_buf());

        assert!(!source.contains(2015, 1));
        assert!(matches!(
            source.load(2015, 1),
            Err(InputError::Missing { year: 2015, day: 1, .. })
        ));

        let input = "(()))\n";
        fs::write(temp.path().join("2015_day01.txt"), input).unwrap();
        assert!(source.contains(2015, 1));
        assert_eq!(source.load(2015, 1).unwrap(), input);
    }

    #[test]
    fn test_explicit_files_joined() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first.txt");
        let second = temp.path().join("second.txt");
        fs::write(&first, "2x3x4\n").unwrap();
        fs::write(&second, "1x1x10\n").unwrap();

        let source = InputSource::Files(vec![first, second]);
        // explicit files serve whatever day is selected
        assert!(source.contains(2015, 2));
        assert_eq!(source.load(2015, 2).unwrap(), "2x3x4\n\n1x1x10");
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let source = InputSource::Files(vec![temp.path().join("nope.txt")]);
        assert!(!source.contains(2015, 3));
        assert!(source.load(2015, 3).is_err());
    }
}
