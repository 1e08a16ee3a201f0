//! The project overview printed when a session starts.

use crossterm::style::Color;
use log::{debug, warn};
use serde::{Deserialize, Deserializer};
use toml::{Table, Value};

use crate::config::{Settings, DEV_DEPENDENCY_SECTIONS, PROD_DEPENDENCY_SECTIONS};
use crate::dependencies::pair_dependency_columns;
use crate::display::{paint, shorten};
use crate::manifest::Manifest;
use crate::table::AsciiTable;

pub const TOOL_TITLE: &str = "PPCHECK";
pub const TOOL_DESCRIPTION: &str = "POETRY PYPROJECT.TOML CHECK";

/// Metadata fields of `tool.poetry`. Every field is optional, and a field
/// of the wrong type reads as missing without affecting the others.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProjectInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub version: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub authors: Vec<String>,
    #[serde(rename = "packages", deserialize_with = "lenient_tables")]
    package_tables: Vec<Table>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        other => {
            debug!("Ignoring non-string metadata value `{other}`");
            Ok(None)
        }
    }
}

fn lenient_array<'de, D, T>(
    deserializer: D,
    item: fn(Value) -> Option<T>,
) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(values.into_iter().filter_map(item).collect()),
        other => {
            debug!("Ignoring non-array metadata value `{other}`");
            Ok(Vec::new())
        }
    }
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    lenient_array(deserializer, |value| match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_tables<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Table>, D::Error> {
    lenient_array(deserializer, |value| match value {
        Value::Table(table) => Some(table),
        _ => None,
    })
}

impl ProjectInfo {
    /// Reads the metadata, falling back to an empty overview when
    /// `tool.poetry` is missing or not a table.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let Some(poetry) = manifest.poetry(&[]) else {
            return Self::default();
        };

        match poetry.clone().try_into::<Self>() {
            Ok(info) => info,
            Err(e) => {
                warn!("Unable to read project metadata: {e}");
                Self::default()
            }
        }
    }

    /// First value of every `packages` entry, e.g. `{ include = "app" }` -> `app`.
    pub fn packages(&self) -> Vec<String> {
        self.package_tables
            .iter()
            .filter_map(|table| table.values().next())
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

/// Renders the overview table: tool title, metadata and dependency grid.
pub fn render_project_info(manifest: &Manifest, settings: &Settings) -> String {
    let info = ProjectInfo::from_manifest(manifest);
    let mut rows: Vec<(String, String)> = vec![(
        paint(TOOL_TITLE, Color::Yellow),
        TOOL_DESCRIPTION.to_string(),
    )];

    let mut push = |key: &str, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            rows.push((key.to_string(), value));
        }
    };

    push("name", info.name.as_deref().map(|n| paint(n, Color::Green)));
    push(
        "version",
        info.version.as_deref().map(|v| paint(v, Color::Cyan)),
    );
    push(
        "description",
        info.description
            .as_deref()
            .map(|d| paint(&shorten(d, settings.description_length), Color::Magenta)),
    );
    push(
        "authors",
        Some(
            info.authors
                .iter()
                .map(|author| paint(author, Color::Blue))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    );
    push("packages", Some(info.packages().join("\n")));

    let prod = manifest.dependencies(&PROD_DEPENDENCY_SECTIONS);
    let dev = manifest.dependencies(&DEV_DEPENDENCY_SECTIONS);
    push(
        "dependencies",
        pair_dependency_columns(&prod, &dev).map(|grid| grid.to_table().render()),
    );

    AsciiTable::from_pairs(rows).render()
}

/// Renders the scripts of the manifest as a titled table.
pub fn render_scripts(manifest: &Manifest) -> String {
    AsciiTable::from_pairs(manifest.scripts())
        .with_title("scripts")
        .render()
}
