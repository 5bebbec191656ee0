//! Template discovery from bundled and runtime sources.
//!
//! Loads application templates from:
//! - Templates embedded in the binary (`bundled/templates/*`)
//! - Sub-directories of an external templates directory holding a
//!   `template-infos.json` file

use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use soundworks_core::package::PackageManifest;
use soundworks_core::paths::PACKAGE_MANIFEST_NAME;
use soundworks_core::utils::IGNORE_FILES;
use soundworks_core::TOOL_PACKAGE_NAME;
use std::fs;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::infos::{ClientTemplate, TemplateInfos, TEMPLATE_INFOS_FILE};
use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/bundled/"]
struct BundledFiles;

const BUNDLED_TEMPLATES_PREFIX: &str = "templates/";
const BUNDLED_PROJECT_FILES_PREFIX: &str = "project-files/";

/// Where the files of a template live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Embedded files under this prefix
    Bundled(String),
    Directory(Utf8PathBuf),
}

/// One file of a template, path relative to the template root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: Utf8PathBuf,
    pub contents: Vec<u8>,
}

impl TemplateFile {
    /// Contents as text
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.contents.clone()).map_err(|_| {
            Error::invalid_template(self.path.as_str(), "file is not valid UTF-8")
        })
    }
}

/// An application template ready to be copied
#[derive(Debug, Clone)]
pub struct Template {
    pub infos: TemplateInfos,
    /// Package publishing the template, recorded as `templatePackage`
    pub package: String,
    pub source: TemplateSource,
}

impl Template {
    pub fn name(&self) -> &str {
        &self.infos.name
    }

    /// Human readable origin of the template
    pub fn location(&self) -> String {
        match &self.source {
            TemplateSource::Bundled(prefix) => format!("<bundled>/{}", prefix.trim_end_matches('/')),
            TemplateSource::Directory(dir) => dir.to_string(),
        }
    }

    /// Every file of the template, sorted by path
    pub fn files(&self) -> Result<Vec<TemplateFile>> {
        let mut files = match &self.source {
            TemplateSource::Bundled(prefix) => bundled_files(prefix),
            TemplateSource::Directory(dir) => directory_files(dir)?,
        };
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    /// Files copied when scaffolding a project
    ///
    /// Leaves out the template infos and every client template.
    pub fn project_files(&self) -> Result<Vec<TemplateFile>> {
        Ok(self
            .files()?
            .into_iter()
            .filter(|file| file.path.as_str() != TEMPLATE_INFOS_FILE)
            .filter(|file| !self.infos.is_client_file(&file.path))
            .collect())
    }

    /// Files of one client template, paths relative to the client pathname
    ///
    /// A client template made of a single file yields one entry with an
    /// empty path.
    pub fn client_files(&self, client: &ClientTemplate) -> Result<Vec<TemplateFile>> {
        let files: Vec<TemplateFile> = self
            .files()?
            .into_iter()
            .filter_map(|file| {
                let relative = file.path.strip_prefix(&client.pathname).ok()?.to_path_buf();
                Some(TemplateFile {
                    path: relative,
                    contents: file.contents,
                })
            })
            .collect();

        if files.is_empty() {
            return Err(Error::invalid_template(
                format!("{}/{}", self.location(), client.pathname),
                "client template has no files",
            ));
        }

        Ok(files)
    }
}

/// All templates known to one invocation
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Bundled templates, then the ones found in `templates_dir`
    ///
    /// Fails with `NoTemplates` when nothing valid was found.
    pub fn load(templates_dir: Option<&Utf8Path>) -> Result<Self> {
        let mut templates = Self::bundled()?;

        if let Some(dir) = templates_dir {
            templates.extend(Self::from_dir(dir)?);
        }

        if templates.is_empty() {
            let mut locations = vec!["<bundled>".to_string()];
            locations.extend(templates_dir.map(ToString::to_string));
            return Err(Error::no_templates(locations.join(", ")));
        }

        Ok(Self { templates })
    }

    /// Templates embedded in the binary
    pub fn bundled() -> Result<Vec<Template>> {
        let mut templates = Vec::new();

        for path in BundledFiles::iter() {
            let Some(rest) = path.strip_prefix(BUNDLED_TEMPLATES_PREFIX) else {
                continue;
            };
            let Some(dir) = rest.strip_suffix(TEMPLATE_INFOS_FILE) else {
                continue;
            };
            if dir.is_empty() || dir[..dir.len() - 1].contains('/') {
                continue;
            }

            let content = bundled_text(&path)
                .ok_or_else(|| Error::invalid_template(path.to_string(), "not valid UTF-8"))?;
            let infos = TemplateInfos::parse(&path, &content)?;

            templates.push(Template {
                infos,
                package: TOOL_PACKAGE_NAME.to_string(),
                source: TemplateSource::Bundled(format!("{}{}", BUNDLED_TEMPLATES_PREFIX, dir)),
            });
        }

        templates.sort_by(|a, b| a.infos.name.cmp(&b.infos.name));
        Ok(templates)
    }

    /// Templates stored in the sub-directories of `dir`
    ///
    /// Sub-directories without infos are ignored, invalid infos are skipped
    /// with a warning.
    pub fn from_dir(dir: &Utf8Path) -> Result<Vec<Template>> {
        if !dir.is_dir() {
            warn!("Templates directory not found: {}", dir);
            return Ok(Vec::new());
        }

        let mut entries: Vec<Utf8PathBuf> = dir
            .read_dir_utf8()?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path().to_path_buf())
            .filter(|path| path.is_dir())
            .collect();
        entries.sort();

        let mut templates = Vec::new();
        for template_dir in entries {
            let infos_path = template_dir.join(TEMPLATE_INFOS_FILE);
            if !infos_path.is_file() {
                debug!("No {} in {}, skipping", TEMPLATE_INFOS_FILE, template_dir);
                continue;
            }

            let infos = match fs::read_to_string(&infos_path)
                .map_err(Error::from)
                .and_then(|content| TemplateInfos::parse(infos_path.as_str(), &content))
            {
                Ok(infos) => infos,
                Err(err) => {
                    warn!("Skipping template: {}", err);
                    continue;
                }
            };

            templates.push(Template {
                package: package_name_near(&template_dir),
                infos,
                source: TemplateSource::Directory(template_dir),
            });
        }

        Ok(templates)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template names, comma separated
    pub fn names(&self) -> String {
        self.templates
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// First template called `name`
    pub fn find(&self, name: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::template_not_found(name, self.names()))
    }

    /// Template a project was created from
    pub fn find_for_project(&self, name: &str, package: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.name() == name && t.package == package)
            .ok_or_else(|| Error::template_not_found(format!("{} ({})", name, package), self.names()))
    }
}

/// Contents of a bundled project file such as `gitignore`
pub fn project_file(name: &str) -> Result<Vec<u8>> {
    let path = format!("{}{}", BUNDLED_PROJECT_FILES_PREFIX, name);
    BundledFiles::get(&path)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| Error::invalid_template(format!("<bundled>/{}", path), "file not found"))
}

fn bundled_text(path: &str) -> Option<String> {
    let file = BundledFiles::get(path)?;
    String::from_utf8(file.data.into_owned()).ok()
}

fn bundled_files(prefix: &str) -> Vec<TemplateFile> {
    BundledFiles::iter()
        .filter_map(|path| {
            let relative = path.strip_prefix(prefix)?;
            if is_ignored(relative) {
                return None;
            }
            let file = BundledFiles::get(&path)?;
            Some(TemplateFile {
                path: Utf8PathBuf::from(relative),
                contents: file.data.into_owned(),
            })
        })
        .collect()
}

fn directory_files(dir: &Utf8Path) -> Result<Vec<TemplateFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(path) = Utf8Path::from_path(entry.path()) else {
            warn!("Skipping non UTF-8 path: {}", entry.path().display());
            continue;
        };
        let relative = path.strip_prefix(dir).unwrap_or(path);
        if is_ignored(relative.as_str()) {
            continue;
        }

        files.push(TemplateFile {
            path: relative.to_path_buf(),
            contents: fs::read(path)?,
        });
    }

    Ok(files)
}

fn is_ignored(relative: &str) -> bool {
    Utf8Path::new(relative)
        .file_name()
        .is_some_and(|name| IGNORE_FILES.contains(&name))
}

/// Name of the closest `package.json` above `template_dir`
fn package_name_near(template_dir: &Utf8Path) -> String {
    for dir in template_dir.ancestors().skip(1) {
        match PackageManifest::load(&dir.join(PACKAGE_MANIFEST_NAME)) {
            Ok(Some(PackageManifest { name: Some(name), .. })) => return name,
            Ok(_) => continue,
            Err(err) => {
                warn!("{}", err);
                continue;
            }
        }
    }

    template_dir
        .file_name()
        .map(ToString::to_string)
        .unwrap_or_else(|| template_dir.to_string())
}
