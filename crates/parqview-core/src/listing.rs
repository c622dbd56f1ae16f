use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::error::PeekError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
}

impl DirEntry {
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Read `dir` and return its entries with directories first, each group sorted
/// by name. Dot-entries are dropped unless `show_hidden` is set.
pub fn read_dir_sorted(dir: &Path, show_hidden: bool) -> Result<Vec<DirEntry>, PeekError> {
    let read = std::fs::read_dir(dir).map_err(|e| PeekError::io(dir, &e))?;

    let mut entries = Vec::new();
    for item in read {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };
        let path = item.path();
        let name = item.file_name().to_string_lossy().into_owned();
        // Follow symlinks so a link to a directory can be entered.
        let (is_dir, size) = match std::fs::metadata(&path) {
            Ok(meta) => (meta.is_dir(), if meta.is_dir() { 0 } else { meta.len() }),
            Err(_) => (false, 0),
        };
        let entry = DirEntry { name, path, is_dir, size };
        if !show_hidden && entry.is_hidden() {
            continue;
        }
        entries.push(entry);
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    }
}

/// Human readable byte count, e.g. `1.5K`, `12M`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}{}", UNITS[0])
    } else if value < 10.0 {
        format!("{value:.1}{}", UNITS[unit])
    } else {
        format!("{value:.0}{}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[DirEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn directories_come_first_then_files_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.parquet"), b"x").unwrap();
        std::fs::write(dir.path().join("a.csv"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("zeta")).unwrap();
        std::fs::create_dir(dir.path().join("alpha")).unwrap();

        let entries = read_dir_sorted(dir.path(), false).unwrap();
        assert_eq!(names(&entries), vec!["alpha", "zeta", "a.csv", "b.parquet"]);
        assert!(entries[0].is_dir);
        assert!(!entries[2].is_dir);
    }

    #[test]
    fn hidden_entries_are_filtered_unless_requested() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".secret"), b"x").unwrap();
        std::fs::write(dir.path().join("visible"), b"x").unwrap();

        let hidden_off = read_dir_sorted(dir.path(), false).unwrap();
        assert_eq!(names(&hidden_off), vec!["visible"]);

        let hidden_on = read_dir_sorted(dir.path(), true).unwrap();
        assert_eq!(names(&hidden_on), vec![".secret", "visible"]);
    }

    #[test]
    fn file_sizes_are_recorded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.bin"), vec![0u8; 42]).unwrap();
        let entries = read_dir_sorted(dir.path(), false).unwrap();
        assert_eq!(entries[0].size, 42);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = read_dir_sorted(&missing, false).unwrap_err();
        assert!(matches!(err, PeekError::Io { .. }));
    }

    #[test]
    fn format_size_scales_units() {
        assert_eq!(format_size(512), "512B");
        assert_eq!(format_size(1536), "1.5K");
        assert_eq!(format_size(20 * 1024 * 1024), "20M");
    }
}
