//! ppcheck Core Library
//!
//! This crate provides the core functionality for ppcheck, an interactive
//! helper for Poetry projects that reads `pyproject.toml`, renders the project
//! metadata and dependencies, and runs scripts or maintenance commands in the
//! project directory.
//!
//! # Key Features
//!
//! - **Manifest Access**: Typed nested-key lookup over the parsed manifest
//! - **Dependency Grid**: Production and development dependencies side by side
//! - **Command Runner**: Shell execution inside a scoped working directory, with timing
//! - **Maintenance Commands**: The fixed checklist of Poetry lifecycle commands
//! - **Display**: Banners, truncation and ASCII tables
//!
//! # Examples
//!
//! Listing the scripts of a project:
//!
//! ```no_run
//! use std::path::Path;
//! use ppcheck_core::manifest::Manifest;
//!
//! let manifest = Manifest::load(Path::new("/path/to/project"))?;
//! for (name, template) in manifest.scripts() {
//!     println!("{name}: {template}");
//! }
//! # Ok::<(), ppcheck_core::error::Error>(())
//! ```

pub mod command_definitions;
pub mod config;
pub mod dependencies;
pub mod display;
pub mod error;
pub mod execution;
pub mod manifest;
pub mod project_info;
pub mod table;
