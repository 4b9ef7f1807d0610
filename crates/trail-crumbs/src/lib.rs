//! Crumb definitions and lookup contract for trail breadcrumbs.
//!
//! A crumb is a named point in a site's navigation hierarchy. Looking up a
//! crumb by key and arguments yields its own display [`Link`]s and an optional
//! reference to its parent crumb.
//!
//! This crate provides:
//! - [`CrumbSource`]: Lookup trait consumed by the breadcrumb renderer
//! - [`CrumbRegistry`]: In-memory source built from closures
//!
//! # Example
//!
//! ```
//! use trail_crumbs::{CrumbRegistry, CrumbSource, CrumbSpec};
//!
//! let mut crumbs = CrumbRegistry::new();
//! crumbs.define("root", |_| CrumbSpec::new().link("Home", "/"));
//! crumbs.define("product", |args| {
//!     CrumbSpec::new()
//!         .link(&args[0], format!("/products/{}", args[0]))
//!         .parent("root", vec![])
//! });
//!
//! let crumb = crumbs.crumb("product", &["widget".to_owned()]).unwrap();
//! assert_eq!(crumb.links[0].text, "widget");
//! assert_eq!(crumb.parent.unwrap().key, "root");
//! ```

mod crumb;
mod link;
mod registry;

pub use crumb::{Crumb, CrumbError, CrumbSource, ParentRef};
pub use link::Link;
pub use registry::{CrumbRegistry, CrumbSpec};
