use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Ecosystem
// ---------------------------------------------------------------------------

/// A language toolchain recognized by marker files under the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ecosystem {
    Python,
    Javascript,
    #[serde(rename = "dotnet")]
    Dotnet,
    Java,
    Go,
}

impl Ecosystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Ecosystem::Python => "python",
            Ecosystem::Javascript => "javascript",
            Ecosystem::Dotnet => "dotnet",
            Ecosystem::Java => "java",
            Ecosystem::Go => "go",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

/// The concrete test tool selected within an ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Pytest,
    Unittest,
    Vitest,
    Jest,
    BunTest,
    NpmTest,
    DotnetTest,
    MavenTest,
    GradleTest,
    GoTest,
}

impl Framework {
    pub fn as_str(self) -> &'static str {
        match self {
            Framework::Pytest => "pytest",
            Framework::Unittest => "unittest",
            Framework::Vitest => "vitest",
            Framework::Jest => "jest",
            Framework::BunTest => "bun_test",
            Framework::NpmTest => "npm_test",
            Framework::DotnetTest => "dotnet_test",
            Framework::MavenTest => "maven_test",
            Framework::GradleTest => "gradle_test",
            Framework::GoTest => "go_test",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecosystem_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Ecosystem::Dotnet).unwrap(),
            "\"dotnet\""
        );
        assert_eq!(
            serde_json::to_string(&Ecosystem::Javascript).unwrap(),
            "\"javascript\""
        );
    }

    #[test]
    fn framework_display_matches_serde() {
        let json = serde_json::to_string(&Framework::GoTest).unwrap();
        assert_eq!(json, format!("\"{}\"", Framework::GoTest));
    }
}
