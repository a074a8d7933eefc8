//! Scenario: Re-running Apply
//!
//! Journey: A developer runs the same `apply` twice by accident, then
//! chains two rules in one run.
//!
//! Success Criteria:
//! - The second identical run changes nothing and says so
//! - Chained rules see the tree left by earlier rules

use crate::common::*;
use crate::assert_missing;

#[test]
fn scenario_second_identical_apply_is_harmless() {
    let env = TestEnv::builder()
        .with_file("tree/src/main/kotlin/com/old/OldService.kt", "package com.old\n\nclass OldService\n")
        .build();
    let args = [
        "apply",
        "tree",
        "--rule",
        "OldService=NewService",
        "--package-rule",
        "com.old=com.fresh",
    ];

    let first = env.run(&args);
    assert!(first.success, "first run failed:\n{}", first.combined_output());
    let after_first = list_all_files(&env.path("tree"));

    let second = env.run(&args);
    assert!(second.success, "second run failed:\n{}", second.combined_output());
    assert!(second.stdout.contains("matched nothing"), "stdout: {}", second.stdout);

    assert_eq!(list_all_files(&env.path("tree")), after_first);
    assert_eq!(
        env.read("tree/src/main/kotlin/com/fresh/NewService.kt"),
        "package com.fresh\n\nclass NewService\n"
    );
}

#[test]
fn scenario_chained_rules_apply_in_order() {
    let env = TestEnv::builder()
        .with_file("tree/Alpha.md", "Alpha\n")
        .build();

    let result = env.run(&["apply", "tree", "--rule", "Alpha=Beta", "--rule", "Beta=Gamma"]);

    assert!(result.success, "apply failed:\n{}", result.combined_output());
    assert_eq!(env.read("tree/Gamma.md"), "Gamma\n");
    assert_missing!(env.path("tree"), "Beta.md");
}
