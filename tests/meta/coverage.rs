//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files need no mirror
    fn needs_mirror(relative: &str) -> bool {
        relative != "main.rs" && relative != "lib.rs" && !relative.ends_with("mod.rs")
    }

    fn collect_relative_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect_relative_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn relative_paths(dir: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let base = Path::new(dir);
        if let Err(error) = collect_relative_paths(base, base, &mut paths) {
            assert!(!base.exists(), "Failed to read {dir}: {error}");
        }
        paths
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = relative_paths(SRC_DIR);
        let test_paths = relative_paths(UNIT_DIR);

        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| needs_mirror(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = relative_paths(SRC_DIR);
        let test_paths = relative_paths(UNIT_DIR);

        let orphaned: Vec<String> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let mut files = BTreeSet::new();
        let base = Path::new("tests");
        collect_relative_paths(base, base, &mut files).unwrap_or_default();

        let empty: Vec<&String> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(base.join(path.as_str()))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without #[test] functions: {empty:?}"
        );
    }
}
