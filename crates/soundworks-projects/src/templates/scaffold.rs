//! Copy an application template into a new project directory

use camino::{Utf8Path, Utf8PathBuf};
use soundworks_core::config::ConfigFormat;
use soundworks_core::paths::PROJECT_FILE_NAME;
use soundworks_core::utils::{is_non_empty_dir, to_valid_package_name};
use soundworks_core::{ApplicationConfig, ProjectDescriptor, TOOL_VERSION};
use std::fs;
use tracing::{debug, info};

use super::loader::{project_file, Template, TemplateFile};
use crate::error::{Error, Result};

/// Placeholder title of the template README
const README_TITLE_PLACEHOLDER: &str = "# `[app-name]`";

/// Dotfiles recreated in every project, `(bundled name, written name)`
const PROJECT_DOTFILES: &[(&str, &str)] = &[("gitignore", ".gitignore"), ("npmrc", ".npmrc")];

/// Write `template` into `target` as the project `name`
///
/// Returns the descriptor written to `.soundworks` and every written path.
pub fn scaffold(
    template: &Template,
    name: &str,
    target: &Utf8Path,
) -> Result<(ProjectDescriptor, Vec<Utf8PathBuf>)> {
    if is_non_empty_dir(target)? {
        return Err(Error::directory_not_empty(target.as_str()));
    }

    info!("Scaffolding application in {}", target);
    fs::create_dir_all(target)?;

    let mut written = Vec::new();

    for file in template.project_files()? {
        let dest = target.join(&file.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&dest, customize(&file, name)?)?;
        debug!("Wrote {}", dest);
        written.push(dest);
    }

    for (bundled, filename) in PROJECT_DOTFILES {
        let dest = target.join(filename);
        fs::write(&dest, project_file(bundled)?)?;
        written.push(dest);
    }

    let descriptor = ProjectDescriptor {
        name: Some(name.to_string()),
        create_version: Some(TOOL_VERSION.to_string()),
        language: Some(template.infos.language.clone()),
        template: Some(template.name().to_string()),
        template_package: Some(template.package.clone()),
        config_format: Some(ConfigFormat::Yaml.as_str().to_string()),
        extra: Default::default(),
    };

    let descriptor_path = target.join(PROJECT_FILE_NAME);
    descriptor.save(&descriptor_path)?;
    written.push(descriptor_path);

    Ok((descriptor, written))
}

/// Contents of `file` as written in the project called `name`
fn customize(file: &TemplateFile, name: &str) -> Result<Vec<u8>> {
    match file.path.as_str() {
        "package.json" => {
            let mut manifest: serde_json::Value = serde_json::from_slice(&file.contents)?;
            if let Some(object) = manifest.as_object_mut() {
                object.insert("name".to_string(), to_valid_package_name(name).into());
            }
            Ok(ConfigFormat::Json.render(&manifest)?.into_bytes())
        }
        "README.md" => {
            let readme = file
                .text()?
                .replacen(README_TITLE_PLACEHOLDER, &format!("# `{}`", name), 1);
            Ok(readme.into_bytes())
        }
        "config/application.yaml" => {
            let record = ConfigFormat::Yaml.parse(&file.path, &file.text()?)?;
            let mut config = ApplicationConfig::from_record(&file.path, record)?;
            config.name = name.to_string();
            config.author = String::new();
            config.clients.clear();

            Ok(ConfigFormat::Yaml.render(&config.to_record()?)?.into_bytes())
        }
        _ => Ok(file.contents.clone()),
    }
}
