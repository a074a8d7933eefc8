//! Property tests for package relocation.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use proptest::prelude::*;

use scaffold::domain::ports::NoopEventSink;
use scaffold::domain::services::PackageMover;
use scaffold::domain::value_objects::{ExcludePatterns, Namespace, SourceRoots};
use scaffold::infrastructure::LocalFs;

/// Namespaces over a tiny alphabet so prefixes and nesting are common
fn namespace() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::string::string_regex("[ab]{1,2}").unwrap(), 1..=3)
        .prop_map(|segments| segments.join("."))
}

/// Files inside the package, on segments the namespaces never use
fn package_files() -> impl Strategy<Value = BTreeSet<String>> {
    let dirs = proptest::collection::vec(proptest::string::string_regex("[xyz]{1,2}").unwrap(), 0..=2);
    let file = proptest::string::string_regex("F[0-9]").unwrap();
    let path = (dirs, file).prop_map(|(mut segments, file)| {
        segments.push(format!("{}.kt", file));
        segments.join("/")
    });
    proptest::collection::btree_set(path, 1..6)
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

    /// PROPERTY: every file under the old package directory ends up at the
    /// same relative path under the new one, in every source root, and the
    /// old directory is gone unless the new one lives inside it.
    #[test]
    fn property_relocation_keeps_every_file(
        old in namespace(),
        new in namespace(),
        files in package_files(),
    ) {
        prop_assume!(old != new);
        prop_assume!(materializable(&files));

        let old_ns = Namespace::parse(&old).unwrap();
        let new_ns = Namespace::parse(&new).unwrap();
        let old_rel = old.replace('.', "/");
        let new_rel = new.replace('.', "/");

        let dir = tempfile::tempdir().unwrap();
        let roots = ["src/main/kotlin", "src/test/kotlin"];
        for root in roots {
            for rel in &files {
                let full = dir.path().join(root).join(&old_rel).join(rel);
                fs::create_dir_all(full.parent().unwrap()).unwrap();
                fs::write(&full, rel).unwrap();
            }
        }

        let fs_port = LocalFs::new();
        let source_roots = SourceRoots::new(["kotlin"]);
        let excludes = ExcludePatterns::default();
        let report = PackageMover::new(&fs_port, &source_roots, &excludes)
            .relocate(dir.path(), &old_ns, &new_ns, &NoopEventSink);

        prop_assert!(!report.has_failures(), "failures: {:?}", report.failed);
        prop_assert_eq!(report.source_roots, 2);
        prop_assert_eq!(report.collisions, 0);

        let new_rel_ref = &new_rel;
        let expected: BTreeSet<String> = roots
            .iter()
            .flat_map(|root| {
                files
                    .iter()
                    .map(move |rel| format!("{}/{}/{}", root, new_rel_ref, rel))
            })
            .collect();
        prop_assert_eq!(files_below(dir.path()), expected);

        let new_inside_old = new_rel.starts_with(&format!("{}/", old_rel));
        if !new_inside_old {
            for root in roots {
                prop_assert!(!dir.path().join(root).join(&old_rel).exists());
            }
        }
    }
}
