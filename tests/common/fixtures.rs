//! Reusable template fixtures.
//!
//! A miniature copy of a Kotlin agent template: a project token in names and
//! text, and a package mirrored under both main and test source roots.

use std::fs;
use std::path::Path;

pub const PROJECT_TOKEN: &str = "ProjectName";
pub const PACKAGE_TOKEN: &str = "com.embabel.template";

pub const README: &str = "# ProjectName\n\nAgent built from com.embabel.template.\n";

pub const POM: &str = r#"<project>
  <groupId>com.embabel.template</groupId>
  <artifactId>ProjectName</artifactId>
</project>
"#;

pub const APPLICATION_KT: &str = r#"package com.embabel.template

class ProjectNameApplication

fun main() = println("ProjectName")
"#;

pub const AGENT_KT: &str = r#"package com.embabel.template.agent

import com.embabel.template.ProjectNameApplication

class WriteAndReviewAgent
"#;

pub const TEST_KT: &str = r#"package com.embabel.template

class ProjectNameApplicationTest
"#;

pub const APPLICATION_YML: &str = "spring:\n  application:\n    name: ProjectName\n";

/// PNG-looking bytes that are not valid UTF-8
pub const LOGO: &[u8] = &[0x89, b'P', b'N', b'G', 0xff, 0xfe, b'P', b'r', b'o', b'j'];

/// Write the fixture template into `root`
pub fn write_template(root: &Path) {
    let files: &[(&str, &[u8])] = &[
        ("README.md", README.as_bytes()),
        ("pom.xml", POM.as_bytes()),
        (
            "src/main/kotlin/com/embabel/template/ProjectNameApplication.kt",
            APPLICATION_KT.as_bytes(),
        ),
        (
            "src/main/kotlin/com/embabel/template/agent/WriteAndReviewAgent.kt",
            AGENT_KT.as_bytes(),
        ),
        (
            "src/test/kotlin/com/embabel/template/ProjectNameApplicationTest.kt",
            TEST_KT.as_bytes(),
        ),
        ("src/main/resources/application.yml", APPLICATION_YML.as_bytes()),
        ("images/logo.png", LOGO),
    ];

    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}
