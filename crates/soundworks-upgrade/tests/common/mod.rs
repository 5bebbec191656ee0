//! Common test infrastructure for soundworks-upgrade tests
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Legacy config contents and versions
//! - `project`: Temporary project trees
//! - `assertions`: Semantic assertions on migration reports

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod constants;
pub mod project;

pub use assertions::*;
pub use constants::*;
pub use project::*;
