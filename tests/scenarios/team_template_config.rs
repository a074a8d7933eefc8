//! Scenario: Team Template Config
//!
//! Journey: A team keeps its own template with different placeholder tokens
//! and records them in a shared `scaffold.toml`.
//!
//! Steps:
//! 1. Team template uses `AppName` / `org.team.seed` and a Java source root
//! 2. `scaffold.toml` declares tokens, source roots and an extra rule
//! 3. A developer runs `scaffold new` with only a project name
//!
//! Success Criteria:
//! - Configured tokens are replaced, including the extra rule
//! - Java sources move to the derived package

use crate::common::*;
use crate::assert_missing;

const TEAM_CONFIG: &str = r#"
[template]
project_token = "AppName"
package_token = "org.team.seed"
default_package_prefix = "org.team"

[substitution]
extensions = [".java", ".md"]
source_roots = ["java"]

[[rules]]
old = "{{OWNER}}"
new = "Platform Team"
"#;

#[test]
fn scenario_team_template_with_custom_tokens() {
    let env = TestEnv::builder()
        .with_file("scaffold.toml", TEAM_CONFIG)
        .with_file("seed/README.md", "# AppName\n\nOwned by {{OWNER}}.\n")
        .with_file(
            "seed/src/main/java/org/team/seed/AppNameMain.java",
            "package org.team.seed;\n\npublic class AppNameMain {}\n",
        )
        .build();

    // Step 3: only the project name and the template location are given
    let result = env.run(&["new", "--project-name", "Billing", "--repo", "seed"]);
    assert!(result.success, "new failed:\n{}", result.combined_output());

    assert_eq!(
        env.read("billing/README.md"),
        "# Billing\n\nOwned by Platform Team.\n"
    );
    assert_eq!(
        env.read("billing/src/main/java/org/team/billing/BillingMain.java"),
        "package org.team.billing;\n\npublic class BillingMain {}\n"
    );
    assert_missing!(env.path("billing"), "src/main/java/org/team/seed");
}
