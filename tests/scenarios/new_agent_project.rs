//! Scenario: New Agent Project
//!
//! Journey: A developer creates an agent project from the template and
//! then renames one of the generated classes.
//!
//! Steps:
//! 1. Runs `scaffold new --project-name travelPlanner`
//! 2. Checks the project builds from the right package
//! 3. Runs `scaffold apply` to rename an agent class
//!
//! Success Criteria:
//! - No template token survives in any allowed file
//! - Package directories exist only under the new package
//! - The second step touches only what matches

use crate::common::*;
use crate::assert_exists;

#[test]
fn scenario_new_agent_project_then_rename_class() {
    let env = TestEnv::builder().with_template().build();
    let template = env.template_dir();

    // Step 1: create the project
    let result = env.run(&[
        "new",
        "--project-name",
        "travelPlanner",
        "--repo",
        template.to_str().unwrap(),
    ]);
    assert!(result.success, "Step 1 failed:\n{}", result.combined_output());

    // Step 2: tokens and packages are gone
    let project = env.path("travelPlanner");
    for file in list_all_files(&project) {
        if file.ends_with(".png") {
            continue;
        }
        let content = std::fs::read_to_string(project.join(&file)).unwrap();
        assert!(
            !content.contains(PROJECT_TOKEN) && !content.contains(PACKAGE_TOKEN),
            "Step 2: template token left in {}:\n{}",
            file,
            content
        );
        assert!(!file.contains(PROJECT_TOKEN), "Step 2: token left in name {}", file);
    }
    assert_exists!(
        project,
        "src/main/kotlin/com/example/travelPlanner/TravelPlannerApplication.kt"
    );
    assert!(env
        .read("travelPlanner/src/main/resources/application.yml")
        .contains("name: TravelPlanner"));

    // Step 3: rename the agent class
    let result = env.run(&[
        "apply",
        "travelPlanner",
        "--rule",
        "WriteAndReviewAgent=ItineraryAgent",
    ]);
    assert!(result.success, "Step 3 failed:\n{}", result.combined_output());
    assert_exists!(
        project,
        "src/main/kotlin/com/example/travelPlanner/agent/ItineraryAgent.kt"
    );
    assert!(env
        .read("travelPlanner/src/main/kotlin/com/example/travelPlanner/agent/ItineraryAgent.kt")
        .contains("class ItineraryAgent"));
    assert_eq!(
        env.read("travelPlanner/src/main/kotlin/com/example/travelPlanner/TravelPlannerApplication.kt"),
        "package com.example.travelPlanner\n\nclass TravelPlannerApplication\n\nfun main() = println(\"TravelPlanner\")\n"
    );
}
