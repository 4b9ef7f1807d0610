//! Arguments and setup shared by the crumb commands.

use std::path::PathBuf;

use clap::Args;
use trail_config::Config;
use trail_crumbs::CrumbRegistry;
use trail_renderer::{BreadcrumbOptions, BreadcrumbRenderer, StaticContext, StyleRegistry};

use crate::error::CliError;

/// Crumb selection and rendering options.
#[derive(Args, Debug)]
pub(crate) struct CrumbArgs {
    /// Crumb key to render.
    key: String,

    /// Arguments passed to the crumb.
    args: Vec<String>,

    /// Path to configuration file.
    #[arg(short, long, env = "TRAIL_CONFIG")]
    config: Option<PathBuf>,

    /// Current request path (replaces the last link's URL).
    #[arg(long)]
    path: Option<String>,

    /// Style name (overrides config).
    #[arg(short, long)]
    style: Option<String>,

    /// Markup placed between fragments.
    #[arg(long)]
    separator: Option<String>,

    /// Container class.
    #[arg(long)]
    class: Option<String>,

    /// Container id.
    #[arg(long)]
    id: Option<String>,

    /// Emit structured-data attributes.
    #[arg(long)]
    semantic: bool,

    /// Render the current page as a link.
    #[arg(long)]
    link_current: bool,

    /// Render trails that consist of a single link.
    #[arg(long)]
    single: bool,

    /// Do not prepend the root crumb.
    #[arg(long)]
    no_autoroot: bool,

    /// Keep the crumb's own URL for the current page.
    #[arg(long)]
    no_transform: bool,
}

impl CrumbArgs {
    /// Call-site options from flags. Unset flags fall back to config.
    fn options(&self) -> BreadcrumbOptions {
        let mut options = BreadcrumbOptions::new();
        options.style.clone_from(&self.style);
        options.overrides.separator.clone_from(&self.separator);
        options.overrides.class.clone_from(&self.class);
        options.overrides.id.clone_from(&self.id);
        if self.semantic {
            options = options.semantic(true);
        }
        if self.link_current {
            options = options.link_current(true);
        }
        if self.single {
            options = options.display_single_fragment(true);
        }
        if self.no_autoroot {
            options = options.autoroot(false);
        }
        if self.no_transform {
            options = options.transform_current_path(false);
        }
        options
    }

    /// Load configuration and prepare everything a renderer needs.
    pub(crate) fn session(&self) -> Result<Session, CliError> {
        let config = Config::load(self.config.as_deref())?;
        config.register_styles(StyleRegistry::global());

        let context = match &self.path {
            Some(path) => StaticContext::new(path.clone()),
            None => StaticContext::without_request(),
        };

        tracing::debug!(
            key = %self.key,
            crumbs = config.crumbs.len(),
            style = self.style.as_deref().unwrap_or("-"),
            "Prepared breadcrumb session"
        );

        Ok(Session {
            crumbs: config.crumb_registry(),
            options: self.options().with_fallback(&config.breadcrumbs),
            context,
            key: self.key.clone(),
            args: self.args.clone(),
        })
    }
}

/// Loaded crumbs plus resolved call-site options for one render.
pub(crate) struct Session {
    crumbs: CrumbRegistry,
    context: StaticContext,
    pub(crate) options: BreadcrumbOptions,
    key: String,
    args: Vec<String>,
}

impl Session {
    pub(crate) fn renderer(&self) -> BreadcrumbRenderer<'_> {
        BreadcrumbRenderer::new(&self.context, &self.crumbs, &self.key, self.args.clone())
    }
}
