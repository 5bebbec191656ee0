use soundworks_core::{ProjectDescriptor, Result};
use tracing::info;

use crate::step::{Introduced, MigrationContext, MigrationStep, StepResult};

/// Record the running tool version as `createVersion`
pub struct BumpCreateVersion;

impl MigrationStep for BumpCreateVersion {
    fn id(&self) -> &'static str {
        "bump-create-version"
    }

    fn description(&self) -> &'static str {
        "Record the current tool version in the project descriptor"
    }

    fn introduced_in(&self) -> Introduced {
        Introduced::Current
    }

    fn apply(&self, ctx: &MigrationContext) -> Result<StepResult> {
        let version = ctx.tool_version.to_string();
        ProjectDescriptor::write_field(&ctx.descriptor_path, "createVersion", version.as_str())?;
        info!("Set createVersion to {} in {}", version, ctx.descriptor_path);

        Ok(StepResult::Applied(vec![ctx.descriptor_path.clone()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Project;
    use semver::Version;
    use serde_json::json;

    #[test]
    fn test_always_reapplies() {
        let project = Project::new().descriptor(r#"{"name":"app","createVersion":"1.0.0-alpha.10"}"#);
        let ctx = project.context().with_tool_version(Version::parse("1.2.3").unwrap());

        assert!(BumpCreateVersion.run(&ctx).is_applied());
        assert!(BumpCreateVersion.run(&ctx).is_applied());

        assert_eq!(project.descriptor_field("createVersion"), Some(json!("1.2.3")));
        assert_eq!(project.descriptor_field("name"), Some(json!("app")));
    }
}
