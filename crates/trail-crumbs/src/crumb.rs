//! Crumb lookup contract.

use crate::link::Link;

/// Error returned when a crumb lookup fails.
#[derive(Debug, thiserror::Error)]
pub enum CrumbError {
    /// No crumb is defined under the requested key.
    #[error("Breadcrumb not found: {key}")]
    NotFound {
        /// Requested crumb key.
        key: String,
    },
}

/// Reference from a crumb to its parent crumb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentRef {
    /// Parent crumb key.
    pub key: String,
    /// Arguments the parent crumb is evaluated with.
    pub args: Vec<String>,
}

/// A crumb evaluated for a specific set of arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Crumb key.
    pub key: String,
    /// The crumb's own links, in display order.
    pub links: Vec<Link>,
    /// Parent crumb, if any.
    pub parent: Option<ParentRef>,
}

/// Source of crumb definitions.
///
/// Implementations decide how crumbs are authored and whether they are
/// reloaded; the renderer only looks them up. Parent references are followed
/// until a crumb reports no parent, so a source must not describe cycles.
/// Links returned without a `key` are attributed to the crumb that produced
/// them.
pub trait CrumbSource: Send + Sync {
    /// Evaluate the crumb defined under `key` with `args`.
    ///
    /// # Errors
    ///
    /// Returns `CrumbError::NotFound` if no crumb is defined under `key`.
    fn crumb(&self, key: &str, args: &[String]) -> Result<Crumb, CrumbError>;

    /// Whether a crumb is defined under `key`.
    fn is_defined(&self, key: &str) -> bool;
}
