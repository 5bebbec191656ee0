//! Add a client to an existing project
//!
//! The client template is copied from the application template the project
//! was created from, then the client is declared in the application config.

use camino::{Utf8Path, Utf8PathBuf};
use soundworks_core::utils::to_valid_filename;
use soundworks_core::{
    AnswerProvider, ApplicationConfig, Choice, ClientDescriptor, ConfigStore, ProjectDescriptor,
    ProjectPaths, Question, Runtime, TOOL_PACKAGE_NAME,
};
use std::fs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::templates::infos::DEFAULT_TEMPLATE;
use crate::templates::{ClientTemplate, TemplateCatalog, TemplateFile};

/// A client ready to be written
#[derive(Debug, Clone)]
pub struct ClientPlan {
    pub name: String,
    pub runtime: Runtime,
    pub default: bool,
    pub template: ClientTemplate,
    /// File or directory receiving the client sources
    pub destination: Utf8PathBuf,
    application_path: Utf8PathBuf,
    application: ApplicationConfig,
    files: Vec<TemplateFile>,
}

impl ClientPlan {
    /// Values shown to the user before confirming
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let mut summary = vec![
            ("name", self.name.clone()),
            ("runtime", self.runtime.to_string()),
            ("template", self.template.name.clone()),
        ];
        if self.runtime == Runtime::Browser {
            summary.push(("default", self.default.to_string()));
        }
        summary
    }

    /// Copy the client sources and declare the client
    ///
    /// Returns the written source files.
    pub fn apply(mut self) -> Result<Vec<Utf8PathBuf>> {
        if self.destination.exists() {
            return Err(Error::destination_exists(self.destination.as_str()));
        }

        let mut written = Vec::new();
        for file in &self.files {
            let dest = if file.path.as_str().is_empty() {
                self.destination.clone()
            } else {
                self.destination.join(&file.path)
            };

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, &file.contents)?;
            debug!("Wrote {}", dest);
            written.push(dest);
        }

        let mut client = ClientDescriptor::new(self.runtime);
        client.default = self.default;
        self.application.insert_client(self.name.clone(), client);

        let store = ConfigStore::new(
            self.application_path
                .parent()
                .map(Utf8Path::to_path_buf)
                .unwrap_or_default(),
        );
        store.write_application(&self.application_path, &self.application)?;

        info!("Client {} created in {}", self.name, self.destination);
        Ok(written)
    }
}

/// Ask everything needed to add a client
///
/// Fails before asking anything when the project descriptor or the
/// application config is missing.
pub fn plan_client(
    paths: &ProjectPaths,
    catalog: &TemplateCatalog,
    answers: &dyn AnswerProvider,
) -> Result<ClientPlan> {
    paths.ensure_project()?;

    let descriptor = ProjectDescriptor::load(&paths.project_file())?.unwrap_or_default();
    let template_name = descriptor
        .template
        .as_deref()
        .unwrap_or(DEFAULT_TEMPLATE)
        .to_lowercase();
    let template_package = descriptor
        .template_package
        .as_deref()
        .unwrap_or(TOOL_PACKAGE_NAME)
        .to_lowercase();

    let store = ConfigStore::new(paths.config_dir());
    let Some((application_path, application)) = store.read_application()? else {
        return Err(Error::missing_application_config(paths.config_dir().as_str()));
    };

    let template = catalog.find_for_project(&template_name, &template_package)?;

    let name = answers.text(Question::required_text(
        "Name of your new client (lowercase, no-space):",
    ))?;
    let name = to_valid_filename(&name, None);

    if application.has_client(&name) {
        return Err(Error::client_exists(name));
    }

    let runtime: Runtime = answers
        .select(Question::select(
            "Which runtime for your client?",
            Runtime::all().iter().map(|r| Choice::new(r.as_str())).collect(),
        ))?
        .parse()?;

    let candidates = template.infos.client_templates(runtime);
    let client_template = match candidates.as_slice() {
        [] => return Err(Error::no_client_template(template.name(), runtime.as_str())),
        [only] => (*only).clone(),
        several => {
            let chosen = answers.select(Question::select(
                "Which template would you like to use?",
                several.iter().map(|t| Choice::new(t.name.as_str())).collect(),
            ))?;
            several
                .iter()
                .find(|t| t.name == chosen)
                .map(|t| (*t).clone())
                .ok_or_else(|| Error::no_client_template(template.name(), runtime.as_str()))?
        }
    };

    let filename = match client_template.extension() {
        "" => name.clone(),
        ext => format!("{}.{}", name, ext),
    };
    let destination = paths
        .root()
        .join(client_template.parent_dir())
        .join(filename);

    if destination.exists() {
        return Err(Error::destination_exists(
            paths.relative(&destination).as_str(),
        ));
    }

    let default = match runtime {
        Runtime::Node => false,
        Runtime::Browser if application.default_client().is_none() => true,
        Runtime::Browser => {
            answers.confirm(Question::confirm("Use this client as default?", false))?
        }
    };

    let files = template.client_files(&client_template)?;

    Ok(ClientPlan {
        name,
        runtime,
        default,
        template: client_template,
        destination,
        application_path,
        application,
        files,
    })
}
