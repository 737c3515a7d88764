//! Structural checks on the test tree
//!
//! Every source file under `src/` has a unit test file at the same relative
//! path under `tests/unit/`, and the reverse. Every test file contains at
//! least one test.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";
    const TESTS: &str = "tests";

    // Module organization files and crate entry points
    fn is_organizational(relative: &Path) -> bool {
        matches!(
            relative.file_name().and_then(|name| name.to_str()),
            Some("mod.rs" | "main.rs" | "lib.rs")
        )
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).map_err(io::Error::other)?;
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    fn listing(paths: &[&PathBuf], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source file has a mirrored unit test file
    #[test]
    fn test_src_files_have_unit_tests() {
        let sources = rust_files(Path::new(SRC)).unwrap();
        let units = rust_files(Path::new(UNIT)).unwrap();

        let missing: Vec<&PathBuf> = sources
            .iter()
            .filter(|path| !is_organizational(path) && !units.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(&missing, UNIT)
        );
    }

    // Tests each unit test file mirrors an existing source file
    #[test]
    fn test_unit_tests_have_src_counterparts() {
        let sources = rust_files(Path::new(SRC)).unwrap();
        let units = rust_files(Path::new(UNIT)).unwrap();

        let orphaned: Vec<&PathBuf> = units
            .iter()
            .filter(|path| !is_organizational(path) && !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            listing(&orphaned, SRC)
        );
    }

    // Tests every test file defines at least one test
    #[test]
    fn test_test_files_contain_tests() {
        let files = rust_files(Path::new(TESTS)).unwrap();

        let mut empty = Vec::new();
        for relative in files.iter().filter(|path| !is_organizational(path)) {
            let content = fs::read_to_string(Path::new(TESTS).join(relative)).unwrap();
            if !content.contains("#[test]") {
                empty.push(relative);
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty, TESTS)
        );
    }

    // Tests every non-organizational source file opens with a module doc
    #[test]
    fn test_src_files_have_module_docs() {
        let sources = rust_files(Path::new(SRC)).unwrap();

        let mut undocumented = Vec::new();
        for relative in &sources {
            let content = fs::read_to_string(Path::new(SRC).join(relative)).unwrap();
            if !content.trim_start().starts_with("//!") {
                undocumented.push(relative);
            }
        }

        assert!(
            undocumented.is_empty(),
            "Source files without a module doc:\n{}",
            listing(&undocumented, SRC)
        );
    }
}
