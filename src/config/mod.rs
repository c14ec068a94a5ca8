//! Configuration management for `metacsv`.
//!
//! The configuration is a column layout: which CSV columns exist, in what
//! order, and how each one maps to a field of an entity JSON object.
//!
//! Layouts are loaded from YAML with the following precedence (highest wins,
//! layouts are not merged):
//! - `--config <path>` CLI flag
//! - `METACSV_CONFIG` environment variable
//! - Project config (`.metacsv/config.yaml`)
//! - User config (`~/.config/metacsv/config.yaml`)
//! - Built-in default layout

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use metacsv_codec::{Header, TagCategory, TagSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MetacsvError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "METACSV_CONFIG";

/// Project config directory, relative to the working directory.
pub const PROJECT_CONFIG_DIR: &str = ".metacsv";

/// Config file name inside config directories.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// How a column's cells are encoded and decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Bool,
    String,
    StringList,
    EntityReference,
    EntityReferences,
    ClassificationTags,
    GlossaryTerms,
    Tier,
    Owners,
    Reviewers,
    Extension,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "string",
            Self::StringList => "stringList",
            Self::EntityReference => "entityReference",
            Self::EntityReferences => "entityReferences",
            Self::ClassificationTags => "classificationTags",
            Self::GlossaryTerms => "glossaryTerms",
            Self::Tier => "tier",
            Self::Owners => "owners",
            Self::Reviewers => "reviewers",
            Self::Extension => "extension",
        }
    }

    /// Tag category for tag-list kinds.
    #[must_use]
    pub const fn tag_category(&self) -> Option<TagCategory> {
        match self {
            Self::ClassificationTags => Some(TagCategory::Classification),
            Self::GlossaryTerms => Some(TagCategory::Glossary),
            Self::Tier => Some(TagCategory::Tier),
            _ => None,
        }
    }

    /// Source assigned to tags decoded from a column of this kind.
    #[must_use]
    pub const fn tag_source(&self) -> Option<TagSource> {
        match self {
            Self::ClassificationTags | Self::Tier => Some(TagSource::Classification),
            Self::GlossaryTerms => Some(TagSource::Glossary),
            _ => None,
        }
    }

    #[must_use]
    pub const fn needs_entity_type(&self) -> bool {
        matches!(self, Self::EntityReference | Self::EntityReferences)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    pub kind: FieldKind,
    /// Entity JSON key; defaults to `tags` for tag kinds and to `name` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Entity type of decoded references, for reference kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

impl ColumnSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            required: false,
            kind,
            field: None,
            entity_type: None,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Entity JSON key this column reads and writes.
    #[must_use]
    pub fn field_key(&self) -> &str {
        match (&self.field, self.kind.tag_category()) {
            (Some(field), _) => field.as_str(),
            (None, Some(_)) => "tags",
            (None, None) => self.name.as_str(),
        }
    }

    #[must_use]
    pub fn header(&self) -> Header {
        Header::new(self.name.clone(), self.required)
    }
}

/// Column layout for export and import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub columns: Vec<ColumnSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new("parent", FieldKind::EntityReference).entity_type("glossaryTerm"),
                ColumnSpec::new("name", FieldKind::String).required(),
                ColumnSpec::new("displayName", FieldKind::String),
                ColumnSpec::new("description", FieldKind::String),
                ColumnSpec::new("synonyms", FieldKind::StringList),
                ColumnSpec::new("relatedTerms", FieldKind::EntityReferences)
                    .entity_type("glossaryTerm"),
                ColumnSpec::new("tags", FieldKind::ClassificationTags),
                ColumnSpec::new("glossaryTerms", FieldKind::GlossaryTerms),
                ColumnSpec::new("tiers", FieldKind::Tier),
                ColumnSpec::new("reviewers", FieldKind::Reviewers),
                ColumnSpec::new("owners", FieldKind::Owners),
                ColumnSpec::new("deprecated", FieldKind::Bool),
                ColumnSpec::new("extension", FieldKind::Extension),
            ],
        }
    }
}

impl Config {
    /// Headers in column order.
    #[must_use]
    pub fn headers(&self) -> Vec<Header> {
        self.columns.iter().map(ColumnSpec::header).collect()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Parse a layout from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or does not describe a layout.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load a layout from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the file is missing, or a parse error.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MetacsvError::FileNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Serialize the layout as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Where the active layout came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Cli(PathBuf),
    Env(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli(path) => write!(f, "--config {}", path.display()),
            Self::Env(path) => write!(f, "{CONFIG_ENV_VAR}={}", path.display()),
            Self::Project(path) | Self::User(path) => write!(f, "{}", path.display()),
            Self::Default => f.write_str("built-in default"),
        }
    }
}

/// CLI overrides for config loading.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
}

/// Project config path under `root`.
#[must_use]
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_DIR).join(CONFIG_FILENAME)
}

/// User config path (`~/.config/metacsv/config.yaml`), if `HOME` is set.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("metacsv")
            .join(CONFIG_FILENAME)
    })
}

/// Pick the highest-precedence config source that applies.
///
/// Explicit sources (CLI, env) are returned even if the file is missing so
/// that loading reports the error; discovered files are only used if present.
#[must_use]
pub fn resolve_source(cli: &CliOverrides, root: &Path) -> ConfigSource {
    if let Some(path) = &cli.config {
        return ConfigSource::Cli(path.clone());
    }
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return ConfigSource::Env(PathBuf::from(path));
    }
    let project = project_config_path(root);
    if project.exists() {
        return ConfigSource::Project(project);
    }
    if let Some(user) = user_config_path().filter(|p| p.exists()) {
        return ConfigSource::User(user);
    }
    ConfigSource::Default
}

/// Load the layout from a resolved source.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Cli(path)
        | ConfigSource::Env(path)
        | ConfigSource::Project(path)
        | ConfigSource::User(path) => Config::from_yaml(path),
        ConfigSource::Default => Ok(Config::default()),
    }
}

/// Load the active layout relative to the current directory and validate it.
///
/// # Errors
///
/// Returns an error if the config cannot be read, parsed, or fails validation.
pub fn load_config(cli: &CliOverrides) -> Result<Config> {
    let root = env::current_dir()?;
    let source = resolve_source(cli, &root);
    let config = load_from(&source)?;
    crate::validation::LayoutValidator::validate(&config)
        .map_err(MetacsvError::from_validation_errors)?;
    debug!(source = %source, columns = config.columns.len(), "loaded column layout");
    Ok(config)
}
