//! Configuration management for trail.
//!
//! Parses `trail.toml` files with serde. A configuration carries three
//! optional sections:
//!
//! - `[breadcrumbs]`: default call-site options applied to every render
//! - `[styles.<name>]`: custom styles registered on top of the built-ins
//! - `[crumbs.<key>]`: table-defined crumbs
//!
//! ## Crumb Arguments
//!
//! Crumb `text`, `url` and `parent_args` values may reference crumb
//! arguments by position: `{0}` expands to the first argument, `{1}` to the
//! second, and so on.
//!
//! ```toml
//! [crumbs.product]
//! text = "{0}"
//! url = "/products/{0}"
//! parent = "products"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use trail_crumbs::{CrumbRegistry, CrumbSpec};
use trail_renderer::{BreadcrumbOptions, StyleDefinition, StyleRegistry};

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default options for every render.
    pub breadcrumbs: BreadcrumbOptions,
    /// Custom styles by name.
    pub styles: BTreeMap<String, StyleDefinition>,
    /// Crumb definitions by key.
    pub crumbs: BTreeMap<String, CrumbConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// A crumb defined in configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct CrumbConfig {
    /// Link text.
    pub text: String,
    /// Link target.
    pub url: Option<String>,
    /// Parent crumb key.
    pub parent: Option<String>,
    /// Arguments passed to the parent crumb.
    #[serde(default)]
    pub parent_args: Vec<String>,
}

impl CrumbConfig {
    fn spec(&self, args: &[String]) -> CrumbSpec {
        let text = interpolate(&self.text, args);
        let mut spec = match &self.url {
            Some(url) => CrumbSpec::new().link(text, interpolate(url, args)),
            None => CrumbSpec::new().text(text),
        };
        if let Some(parent) = &self.parent {
            let parent_args = self
                .parent_args
                .iter()
                .map(|arg| interpolate(arg, args))
                .collect();
            spec = spec.parent(parent.clone(), parent_args);
        }
        spec
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Replace `{N}` placeholders with the N-th argument.
///
/// The template is scanned once, so placeholders inside substituted
/// arguments are kept as text. Placeholders without a matching argument
/// are left untouched.
fn interpolate(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let argument = tail.find('}').and_then(|end| {
            let index: usize = tail[1..end].parse().ok()?;
            Some((args.get(index)?, end))
        });
        match argument {
            Some((arg, end)) => {
                out.push_str(arg);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Require a tag name to be a plain ASCII element name.
fn require_tag_name(tag: Option<&str>, field: &str) -> Result<(), ConfigError> {
    let Some(tag) = tag else { return Ok(()) };
    let valid = tag.starts_with(|c: char| c.is_ascii_alphabetic())
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must be a plain tag name, got {tag:?}"
        )));
    }
    Ok(())
}

fn validate_style(style: &StyleDefinition, section: &str) -> Result<(), ConfigError> {
    require_tag_name(
        style.container_tag.as_deref(),
        &format!("{section}.container_tag"),
    )?;
    require_tag_name(
        style.fragment_tag.as_deref(),
        &format!("{section}.fragment_tag"),
    )?;
    Ok(())
}

impl Config {
    /// Load configuration from `config_path`, or return the default
    /// configuration when no path is given.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_styles()?;
        self.validate_breadcrumbs()?;
        self.validate_crumbs()?;
        Ok(())
    }

    fn validate_styles(&self) -> Result<(), ConfigError> {
        for (name, style) in &self.styles {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "style names cannot be empty".to_owned(),
                ));
            }
            validate_style(style, &format!("styles.{name}"))?;
        }
        Ok(())
    }

    fn validate_breadcrumbs(&self) -> Result<(), ConfigError> {
        validate_style(&self.breadcrumbs.overrides, "breadcrumbs")?;
        if let Some(style) = &self.breadcrumbs.style
            && !self.styles.contains_key(style)
            && !StyleRegistry::new().contains(style)
        {
            return Err(ConfigError::Validation(format!(
                "breadcrumbs.style refers to unknown style {style:?}"
            )));
        }
        Ok(())
    }

    fn validate_crumbs(&self) -> Result<(), ConfigError> {
        for (key, crumb) in &self.crumbs {
            if key.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "crumb keys cannot be empty".to_owned(),
                ));
            }
            if crumb.text.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "crumbs.{key}.text cannot be empty"
                )));
            }
            if let Some(parent) = &crumb.parent
                && !self.crumbs.contains_key(parent)
            {
                return Err(ConfigError::Validation(format!(
                    "crumbs.{key}.parent refers to undefined crumb {parent:?}"
                )));
            }
        }
        for key in self.crumbs.keys() {
            self.require_acyclic_parents(key)?;
        }
        Ok(())
    }

    /// Follow the parent chain of `key` and reject it if a crumb repeats.
    fn require_acyclic_parents(&self, key: &str) -> Result<(), ConfigError> {
        let mut chain = vec![key];
        let mut current = key;
        while let Some(parent) = self
            .crumbs
            .get(current)
            .and_then(|crumb| crumb.parent.as_deref())
        {
            let repeated = chain.contains(&parent);
            chain.push(parent);
            if repeated {
                return Err(ConfigError::Validation(format!(
                    "crumbs.{key}.parent forms a cycle: {}",
                    chain.join(" -> ")
                )));
            }
            current = parent;
        }
        Ok(())
    }

    /// Register configured styles into `registry`.
    pub fn register_styles(&self, registry: &StyleRegistry) {
        for (name, style) in &self.styles {
            if registry.contains(name) {
                tracing::warn!(style = %name, "Configured style replaces an existing style");
            }
            registry.register(name.clone(), style.clone());
        }
    }

    /// Build a crumb source from the configured crumbs.
    pub fn crumb_registry(&self) -> CrumbRegistry {
        let mut registry = CrumbRegistry::new();
        for (key, crumb) in &self.crumbs {
            let crumb = crumb.clone();
            registry.define(key.clone(), move |args| crumb.spec(args));
        }
        registry
    }
}
