//! Shared crumb definitions for unit tests.

use trail_crumbs::{Crumb, CrumbError, CrumbRegistry, CrumbSource, CrumbSpec, Link, ParentRef};

/// `root` → `products` → `product(name)`, plus a two-link `search` crumb.
pub(crate) fn shop_crumbs() -> CrumbRegistry {
    CrumbRegistry::new()
        .with_crumb("root", |_| CrumbSpec::new().link("Home", "/"))
        .with_crumb("products", |_| {
            CrumbSpec::new()
                .link("Products", "/products")
                .parent("root", Vec::new())
        })
        .with_crumb("product", |args| {
            let name = args.first().cloned().unwrap_or_default();
            CrumbSpec::new()
                .link(name.clone(), format!("/products/{}", name.to_lowercase()))
                .parent("products", Vec::new())
        })
        .with_crumb("search", |args| {
            let query = args.first().cloned().unwrap_or_default();
            CrumbSpec::new()
                .link("Search", "/search")
                .link(format!("Results for {query}"), format!("/search?q={query}"))
                .parent("products", Vec::new())
        })
}

/// Shop crumbs without a `root` crumb.
pub(crate) fn rootless_crumbs() -> CrumbRegistry {
    CrumbRegistry::new()
        .with_crumb("products", |_| CrumbSpec::new().link("Products", "/products"))
        .with_crumb("product", |args| {
            CrumbSpec::new()
                .link(args.first().cloned().unwrap_or_default(), "/products/item")
                .parent("products", Vec::new())
        })
}

/// `root` → `page` from a source that leaves `Link::key` unset.
pub(crate) struct UnkeyedSource;

impl CrumbSource for UnkeyedSource {
    fn crumb(&self, key: &str, _args: &[String]) -> Result<Crumb, CrumbError> {
        let (text, parent) = match key {
            "root" => ("Home", None),
            "page" => {
                let parent = ParentRef {
                    key: "root".to_owned(),
                    args: Vec::new(),
                };
                ("Page", Some(parent))
            }
            _ => return Err(CrumbError::NotFound { key: key.to_owned() }),
        };
        Ok(Crumb {
            key: key.to_owned(),
            links: vec![Link::new(text)],
            parent,
        })
    }

    fn is_defined(&self, key: &str) -> bool {
        matches!(key, "root" | "page")
    }
}
