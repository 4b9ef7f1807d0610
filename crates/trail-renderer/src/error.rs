//! Rendering errors.

use trail_crumbs::CrumbError;

/// Error returned when breadcrumbs cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The requested style is not registered.
    #[error("Breadcrumbs style \"{name}\" not found. Use any of: {}", .available.join(", "))]
    StyleNotFound {
        /// Requested style name.
        name: String,
        /// Registered style names, sorted.
        available: Vec<String>,
    },
    /// A crumb in the chain could not be looked up.
    #[error(transparent)]
    Crumb(#[from] CrumbError),
}
