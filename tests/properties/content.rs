//! Property tests for content replacement.

use std::fs;

use proptest::prelude::*;

use scaffold::domain::ports::NoopEventSink;
use scaffold::domain::services::ContentReplacer;
use scaffold::domain::value_objects::{ExcludePatterns, ExtensionAllowlist};
use scaffold::infrastructure::LocalFs;

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{1,6}").unwrap()
}

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z .\n]{0,80}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an allowed file ends up exactly equal to `str::replace`,
    /// and a disallowed file keeps its bytes.
    #[test]
    fn property_allowed_files_match_str_replace(
        body in text(),
        old in token(),
        new in token(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let content = format!("{}{}{}", body, old, body);
        fs::write(dir.path().join("Allowed.kt"), &content).unwrap();
        fs::write(dir.path().join("ignored.bin"), &content).unwrap();

        let fs_port = LocalFs::new();
        let allow = ExtensionAllowlist::new([".kt"]);
        let excludes = ExcludePatterns::default();
        let report = ContentReplacer::new(&fs_port, &allow, &excludes)
            .replace(dir.path(), &old, &new, &NoopEventSink);

        prop_assert!(!report.has_failures());
        prop_assert_eq!(report.examined, 1);
        prop_assert_eq!(
            fs::read_to_string(dir.path().join("Allowed.kt")).unwrap(),
            content.replace(&old, &new)
        );
        prop_assert_eq!(
            fs::read_to_string(dir.path().join("ignored.bin")).unwrap(),
            content
        );
    }

    /// PROPERTY: once the token is gone from the rewritten text, a second
    /// pass changes nothing.
    #[test]
    fn property_second_pass_is_a_noop(
        body in text(),
        old in token(),
        new in token(),
    ) {
        let content = format!("{}{}", old, body);
        prop_assume!(!content.replace(&old, &new).contains(&old));

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), &content).unwrap();

        let fs_port = LocalFs::new();
        let allow = ExtensionAllowlist::new([".md"]);
        let excludes = ExcludePatterns::default();
        let replacer = ContentReplacer::new(&fs_port, &allow, &excludes);

        let first = replacer.replace(dir.path(), &old, &new, &NoopEventSink);
        let after_first = fs::read_to_string(dir.path().join("README.md")).unwrap();
        let second = replacer.replace(dir.path(), &old, &new, &NoopEventSink);

        prop_assert_eq!(first.modified, 1);
        prop_assert_eq!(second.modified, 0);
        prop_assert_eq!(
            fs::read_to_string(dir.path().join("README.md")).unwrap(),
            after_first
        );
    }
}
