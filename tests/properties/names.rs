//! Property tests for name replacement.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use proptest::prelude::*;

use scaffold::domain::ports::NoopEventSink;
use scaffold::domain::services::NameReplacer;
use scaffold::domain::value_objects::ExcludePatterns;
use scaffold::infrastructure::LocalFs;

const OLD: &str = "Tpl";
const NEW: &str = "Acme";

/// Relative file paths whose segments may embed the token
fn tree() -> impl Strategy<Value = BTreeSet<String>> {
    let segment = prop_oneof![
        proptest::string::string_regex("[a-z]{1,4}").unwrap(),
        proptest::string::string_regex("[a-z]{0,2}").unwrap().prop_map(|s| format!("{}Tpl", s)),
        proptest::string::string_regex("[a-z]{0,2}").unwrap().prop_map(|s| format!("Tpl{}", s)),
    ];
    let path = proptest::collection::vec(segment, 1..=4).prop_map(|segments| {
        let mut path = segments.join("/");
        path.push_str(".f");
        path
    });
    proptest::collection::btree_set(path, 1..8)
}

fn files_below(root: &Path) -> BTreeSet<String> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// Paths that are a file in one place and a directory prefix in another
/// cannot be materialized.
fn materializable(paths: &BTreeSet<String>) -> bool {
    paths
        .iter()
        .all(|p| !paths.iter().any(|q| q.starts_with(&format!("{}/", p))))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every file survives at its path with the token replaced in
    /// each segment, and no name keeps the token.
    #[test]
    fn property_every_segment_is_renamed(paths in tree()) {
        prop_assume!(materializable(&paths));
        let expected: BTreeSet<String> = paths.iter().map(|p| p.replace(OLD, NEW)).collect();
        // Two template paths collapsing into one would be a collision
        prop_assume!(expected.len() == paths.len());

        let dir = tempfile::tempdir().unwrap();
        for rel in &paths {
            let full = dir.path().join(rel);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(&full, rel).unwrap();
        }

        let fs_port = LocalFs::new();
        let excludes = ExcludePatterns::default();
        let report = NameReplacer::new(&fs_port, &excludes)
            .replace(dir.path(), OLD, NEW, &NoopEventSink);

        prop_assert!(!report.has_failures(), "failures: {:?}", report.failed);
        prop_assert_eq!(files_below(dir.path()), expected);

        // Contents travel with their files
        for rel in &paths {
            let moved = dir.path().join(rel.replace(OLD, NEW));
            prop_assert_eq!(fs::read_to_string(moved).unwrap(), rel.clone());
        }
    }
}
