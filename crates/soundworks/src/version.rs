//! Version of the running CLI

use serde::Serialize;
use soundworks_core::{TOOL_PACKAGE_NAME, TOOL_VERSION};

/// What `soundworks version` reports and what created projects record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub package: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            version: TOOL_VERSION,
            package: TOOL_PACKAGE_NAME,
        }
    }

    /// Tag printed at the top of wizard sessions
    pub fn banner(&self) -> String {
        format!("[{}#v{}]", self.package, self.version)
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "soundworks {} ({})", self.version, self.package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VersionInfo {
        VersionInfo {
            version: "1.0.0-beta.2",
            package: "@soundworks/create",
        }
    }

    #[test]
    fn test_banner_matches_created_projects_tag() {
        assert_eq!(sample().banner(), "[@soundworks/create#v1.0.0-beta.2]");
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "soundworks 1.0.0-beta.2 (@soundworks/create)");
    }

    #[test]
    fn test_current_is_the_recorded_create_version() {
        let info = VersionInfo::current();
        assert_eq!(
            soundworks_core::version::parse_loose(info.version).unwrap().to_string(),
            TOOL_VERSION
        );
        assert_eq!(info.package, TOOL_PACKAGE_NAME);
    }
}
