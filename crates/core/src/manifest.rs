//! Read-only access to a parsed `pyproject.toml`.
//!
//! Lookups never fail on missing keys: an absent section simply yields an
//! empty listing.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, warn};
use toml::{Table, Value};

use crate::config::manifest_path;
use crate::error::{Error, Result};

/// Root of the Poetry configuration inside the manifest
pub const POETRY_PATH: [&str; 2] = ["tool", "poetry"];

/// The kind of a manifest value, used to type-check a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
    Array,
    Table,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Datetime(_) => ValueKind::Datetime,
            Value::Array(_) => ValueKind::Array,
            Value::Table(_) => ValueKind::Table,
        }
    }
}

/// Walks `keys` through nested tables and returns the value at the end.
///
/// An empty key path finds nothing.
pub fn lookup<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    match keys {
        [] => None,
        [key] => root.as_table()?.get(*key),
        [key, rest @ ..] => lookup(root.as_table()?.get(*key)?, rest),
    }
}

/// Whether `keys` leads to a value, of kind `expected` if one is given.
///
/// # Examples
///
/// ```
/// use ppcheck_core::manifest::{path_exists, ValueKind};
///
/// let root: toml::Value = toml::from_str("[a.b]\nc = 123").unwrap();
/// assert!(path_exists(&root, Some(ValueKind::Integer), &["a", "b", "c"]));
/// assert!(!path_exists(&root, Some(ValueKind::String), &["a", "b", "c"]));
/// assert!(!path_exists(&root, Some(ValueKind::Integer), &[]));
/// ```
pub fn path_exists(root: &Value, expected: Option<ValueKind>, keys: &[&str]) -> bool {
    match (lookup(root, keys), expected) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(value), Some(kind)) => ValueKind::of(value) == kind,
    }
}

/// A named package requirement, e.g. `requests = "^2.31"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub name: String,
    pub constraint: String,
}

impl DependencyEntry {
    pub fn new(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
        }
    }

    fn from_value(name: &str, value: &Value) -> Self {
        let constraint = match value {
            Value::String(constraint) => constraint.clone(),
            Value::Table(table) => match table.get("version") {
                Some(Value::String(version)) => version.clone(),
                _ => value.to_string(),
            },
            other => other.to_string(),
        };

        Self::new(name, constraint)
    }
}

impl Display for DependencyEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} {}", self.name, self.constraint)
    }
}

/// A parsed manifest and the directory it belongs to.
#[derive(Debug, Clone)]
pub struct Manifest {
    root: Value,
    directory: PathBuf,
}

impl Manifest {
    pub fn new(root: Table, directory: impl Into<PathBuf>) -> Self {
        Self {
            root: Value::Table(root),
            directory: directory.into(),
        }
    }

    /// A manifest without any content, used when the file is missing.
    pub fn empty(directory: impl Into<PathBuf>) -> Self {
        Self::new(Table::new(), directory)
    }

    /// Parses manifest text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML.
    pub fn parse(content: &str, directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        let root: Table = toml::from_str(content).map_err(|e| {
            Error::toml_error(
                "parsing".to_string(),
                "manifest".to_string(),
                manifest_path(&directory).display().to_string(),
                e,
            )
        })?;

        Ok(Self::new(root, directory))
    }

    /// Loads `pyproject.toml` from the project directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ManifestNotFound`] if there is no manifest, or an
    /// error if it cannot be read or parsed.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = manifest_path(project_dir);
        debug!("Manifest path: `{}`", path.display());

        if !path.is_file() {
            return Err(Error::manifest_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            Error::io_error("manifest".to_string(), path.display().to_string(), e)
        })?;

        Self::parse(&content, project_dir)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Directory containing the manifest; commands run here.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Looks up a path below `tool.poetry`.
    pub fn poetry(&self, keys: &[&str]) -> Option<&Value> {
        let path: Vec<&str> = POETRY_PATH.iter().chain(keys).copied().collect();
        lookup(&self.root, &path)
    }

    /// The `tool.poetry.scripts` table as name -> command template, in
    /// declaration order. Empty if absent.
    pub fn scripts(&self) -> IndexMap<String, String> {
        let Some(Value::Table(scripts)) = self.poetry(&["scripts"]) else {
            debug!("No scripts table in manifest");
            return IndexMap::new();
        };

        scripts
            .iter()
            .map(|(name, value)| {
                let template = match value {
                    Value::String(template) => template.clone(),
                    other => other.to_string(),
                };
                (name.clone(), template)
            })
            .collect()
    }

    /// Collects the entries of every dependency section found among
    /// `sections`, in the order the sections are given.
    ///
    /// Dotted section names such as `group.dev.dependencies` are nested
    /// paths below `tool.poetry`.
    pub fn dependencies(&self, sections: &[&str]) -> Vec<DependencyEntry> {
        let mut entries = Vec::new();

        for section in sections {
            let path: Vec<&str> = POETRY_PATH
                .iter()
                .copied()
                .chain(section.split('.'))
                .collect();

            if !path_exists(&self.root, Some(ValueKind::Table), &path) {
                if path_exists(&self.root, None, &path) {
                    warn!("Dependency section `{section}` is not a table, ignoring it");
                }
                continue;
            }

            if let Some(Value::Table(table)) = lookup(&self.root, &path) {
                debug!("Found {} entries in `{section}`", table.len());
                entries.extend(
                    table
                        .iter()
                        .map(|(name, value)| DependencyEntry::from_value(name, value)),
                );
            }
        }

        entries
    }
}
