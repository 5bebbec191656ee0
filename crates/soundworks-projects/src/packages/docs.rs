//! Documentation links for the packages a project uses

use soundworks_core::package::PackageManifest;
use soundworks_core::{AnswerProvider, Choice, Question};

use super::database::{PackageEntry, PackageKind};
use crate::error::Result;

const INSTALLED_ONLY: &str = "installed";
const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSection {
    pub kind: PackageKind,
    pub installed: Vec<&'static PackageEntry>,
    /// Empty unless every package was requested
    pub not_installed: Vec<&'static PackageEntry>,
}

impl DocSection {
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty() && self.not_installed.is_empty()
    }
}

/// Documentation sections for plugins and libraries
pub fn doc_sections(manifest: &PackageManifest, installed_only: bool) -> Vec<DocSection> {
    PackageKind::all()
        .into_iter()
        .map(|kind| {
            let (installed, not_installed): (Vec<_>, Vec<_>) = kind
                .entries()
                .iter()
                .partition(|entry| manifest.dependencies.contains_key(entry.name));

            DocSection {
                kind,
                installed,
                not_installed: if installed_only { Vec::new() } else { not_installed },
            }
        })
        .collect()
}

/// Ask whether to list only installed packages, then build the sections
pub fn find_docs(manifest: &PackageManifest, answers: &dyn AnswerProvider) -> Result<Vec<DocSection>> {
    let scope = answers.select(Question::select(
        "Which packages do you want to check?",
        vec![
            Choice::titled("installed ones", INSTALLED_ONLY),
            Choice::titled("all ones", ALL),
        ],
    ))?;

    Ok(doc_sections(manifest, scope == INSTALLED_ONLY))
}
