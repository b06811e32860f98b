//! Local puzzle input lookup

use std::fs;
use std::io;
use std::path::PathBuf;

/// Read-only store of puzzle inputs
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`. An override path,
/// when set, answers every lookup.
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
    override_path: Option<PathBuf>,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            override_path: None,
        }
    }

    pub fn with_override(dir: PathBuf, path: PathBuf) -> Self {
        Self {
            dir,
            override_path: Some(path),
        }
    }

    /// File the input for `year`/`day` is read from
    pub fn path_for(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_path {
            Some(path) => path.clone(),
            None => self.dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path_for(year, day).is_file()
    }

    pub fn read(&self, year: u16, day: u8) -> io::Result<String> {
        fs::read_to_string(self.path_for(year, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.path_for(2021, 1), PathBuf::from("inputs/2021_day01.txt"));
        assert_eq!(store.path_for(2021, 15), PathBuf::from("inputs/2021_day15.txt"));
    }

    #[test]
    fn test_read_present_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2021, 9));
        assert_eq!(
            store.read(2021, 9).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );

        fs::write(temp.path().join("2021_day09.txt"), "2199943210\n").unwrap();
        assert!(store.contains(2021, 9));
        assert_eq!(store.read(2021, 9).unwrap(), "2199943210\n");
    }

    #[test]
    fn test_override_answers_every_day() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("cave.txt");
        fs::write(&file, "1").unwrap();

        let store = InputStore::with_override(temp.path().join("absent"), file.clone());
        assert_eq!(store.path_for(2021, 15), file);
        assert_eq!(store.read(2021, 1).unwrap(), "1");
    }
}
