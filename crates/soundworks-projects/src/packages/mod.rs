//! Auxiliary npm packages: database, installer and documentation lookup

pub mod database;
pub mod docs;
pub mod installer;
pub mod runner;

pub use database::{PackageEntry, PackageKind, GENERAL_DOCUMENTATION};
pub use docs::{doc_sections, find_docs, DocSection};
pub use installer::{
    check_deps, install_dependencies, installed, load_manifest, plan_packages, PackagePlan,
};
pub use runner::{command_line, CommandRunner, SystemRunner};
