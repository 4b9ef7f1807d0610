//! CLI command implementations.

pub(crate) mod links;
pub(crate) mod parent;
pub(crate) mod render;
mod session;
pub(crate) mod styles;

pub(crate) use links::LinksArgs;
pub(crate) use parent::ParentArgs;
pub(crate) use render::RenderArgs;
pub(crate) use styles::StylesArgs;
