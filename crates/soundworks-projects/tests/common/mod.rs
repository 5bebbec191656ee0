//! Common test infrastructure for soundworks-projects tests
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
//! - `project`: Projects scaffolded from the bundled template
//! - `runner`: Command runner recording invocations

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod project;
pub mod runner;

pub use project::*;
pub use runner::*;
