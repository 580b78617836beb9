use std::path::{Path, PathBuf};

/// files a directory must hold to be read as an unpacked GTFS source.
pub const REQUIRED_TABLES: [&str; 5] = [
    "agency.txt",
    "stops.txt",
    "routes.txt",
    "trips.txt",
    "stop_times.txt",
];

/// at least one of these must also be present.
pub const CALENDAR_TABLES: [&str; 2] = ["calendar.txt", "calendar_dates.txt"];

/// finds GTFS sources at or below `root`.
///
/// a `.zip` file is a source. a directory is searched recursively: every
/// `.zip` file below it is a source, and the directory itself is a source when
/// it holds all [`REQUIRED_TABLES`] plus one of [`CALENDAR_TABLES`]. entries
/// are visited in name order. paths that cannot be read are skipped.
pub fn discover_feed_paths(root: &Path) -> Vec<PathBuf> {
    let mut results = vec![];
    discover(root, &mut results);
    results
}

fn discover(path: &Path, results: &mut Vec<PathBuf>) {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) => {
            log::debug!("skipping '{}': {}", path.display(), e);
            return;
        }
    };
    if !metadata.is_dir() {
        if is_zip(path) {
            results.push(path.to_path_buf());
        }
        return;
    }

    let mut entries = match std::fs::read_dir(path) {
        Ok(read_dir) => read_dir
            .filter_map(|entry| match entry {
                Ok(e) => Some(e.path()),
                Err(e) => {
                    log::debug!("skipping entry of '{}': {}", path.display(), e);
                    None
                }
            })
            .collect::<Vec<_>>(),
        Err(e) => {
            log::debug!("skipping directory '{}': {}", path.display(), e);
            return;
        }
    };
    entries.sort();

    let mut file_names: Vec<String> = vec![];
    for entry in entries.iter() {
        if entry.is_dir() {
            discover(entry, results);
        } else if is_zip(entry) {
            results.push(entry.clone());
        } else if let Some(name) = entry.file_name().and_then(|n| n.to_str()) {
            file_names.push(name.to_string());
        }
    }

    let has_required = REQUIRED_TABLES
        .iter()
        .all(|t| file_names.iter().any(|n| n == t));
    let has_calendar = CALENDAR_TABLES
        .iter()
        .any(|t| file_names.iter().any(|n| n == t));
    if has_required && has_calendar {
        results.push(path.to_path_buf());
    }
}

fn is_zip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("zip")
}

#[cfg(test)]
mod tests {
    use super::{discover_feed_paths, REQUIRED_TABLES};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "transitnet-discovery-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("test setup failed creating scratch directory");
        dir
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").expect("test setup failed writing file");
    }

    #[test]
    fn test_finds_zips_and_complete_directories() {
        let root = scratch_dir("complete");
        touch(&root, "b.zip");
        touch(&root, "a.zip");
        touch(&root, "readme.txt");

        let complete = root.join("city");
        fs::create_dir_all(&complete).expect("test setup failed");
        for table in REQUIRED_TABLES {
            touch(&complete, table);
        }
        touch(&complete, "calendar_dates.txt");

        let no_calendar = root.join("partial");
        fs::create_dir_all(&no_calendar).expect("test setup failed");
        for table in REQUIRED_TABLES {
            touch(&no_calendar, table);
        }

        let missing_table = root.join("sparse");
        fs::create_dir_all(&missing_table).expect("test setup failed");
        touch(&missing_table, "stops.txt");
        touch(&missing_table, "calendar.txt");
        touch(&missing_table, "nested.zip");

        let found = discover_feed_paths(&root);
        assert_eq!(
            found,
            vec![
                root.join("a.zip"),
                root.join("b.zip"),
                complete.clone(),
                missing_table.join("nested.zip"),
            ]
        );
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_single_file_roots() {
        let root = scratch_dir("single");
        touch(&root, "feed.zip");
        touch(&root, "feed.txt");
        assert_eq!(
            discover_feed_paths(&root.join("feed.zip")),
            vec![root.join("feed.zip")]
        );
        assert!(discover_feed_paths(&root.join("feed.txt")).is_empty());
        assert!(discover_feed_paths(&root.join("missing")).is_empty());
        let _ = fs::remove_dir_all(&root);
    }
}
