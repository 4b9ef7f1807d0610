//! Crumb chain resolution.

use std::cell::OnceCell;

use trail_crumbs::{Crumb, CrumbError, CrumbSource, Link};

/// Resolves a crumb key into its root-first chain of links.
///
/// The chain is computed on first use and cached for the lifetime of the
/// resolver, which is expected to live for one page render.
pub struct CrumbResolver<'a> {
    source: &'a dyn CrumbSource,
    key: Option<String>,
    args: Vec<String>,
    links: OnceCell<Vec<Link>>,
}

impl<'a> CrumbResolver<'a> {
    /// Create a resolver for `key`. An empty key yields an empty chain.
    pub fn new(source: &'a dyn CrumbSource, key: &str, args: Vec<String>) -> Self {
        Self {
            source,
            key: (!key.is_empty()).then(|| key.to_owned()),
            args,
            links: OnceCell::new(),
        }
    }

    /// Key being resolved, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Root-first links for the crumb and all its ancestors.
    ///
    /// The last link is marked current.
    ///
    /// # Errors
    ///
    /// Returns `CrumbError::NotFound` if the crumb or any ancestor is undefined.
    pub fn resolve(&self) -> Result<&[Link], CrumbError> {
        if let Some(links) = self.links.get() {
            return Ok(links);
        }
        let links = match &self.key {
            Some(key) => self.walk(key)?,
            None => Vec::new(),
        };
        Ok(self.links.get_or_init(|| links))
    }

    /// Links of a single crumb, without its ancestors.
    ///
    /// # Errors
    ///
    /// Returns `CrumbError::NotFound` if the crumb is undefined.
    pub fn own_links(&self, key: &str, args: &[String]) -> Result<Vec<Link>, CrumbError> {
        Ok(self.crumb(key, args)?.links)
    }

    /// Whether the source defines a crumb under `key`.
    pub fn is_defined(&self, key: &str) -> bool {
        self.source.is_defined(key)
    }

    /// Look up a crumb and stamp its key on every link that lacks one.
    fn crumb(&self, key: &str, args: &[String]) -> Result<Crumb, CrumbError> {
        let mut crumb = self.source.crumb(key, args)?;
        for link in &mut crumb.links {
            link.key.get_or_insert_with(|| crumb.key.clone());
        }
        Ok(crumb)
    }

    fn walk(&self, key: &str) -> Result<Vec<Link>, CrumbError> {
        let crumb = self.crumb(key, &self.args)?;

        // Collected child-first; each crumb's links stay together in order.
        let mut chain = vec![crumb.links];
        let mut parent = crumb.parent;
        while let Some(parent_ref) = parent {
            tracing::trace!(
                key = %key,
                parent = %parent_ref.key,
                depth = chain.len(),
                "Following parent crumb"
            );
            let crumb = self.crumb(&parent_ref.key, &parent_ref.args)?;
            chain.push(crumb.links);
            parent = crumb.parent;
        }

        let mut links: Vec<Link> = chain.into_iter().rev().flatten().collect();
        if let Some(last) = links.last_mut() {
            last.set_current();
        }

        tracing::debug!(key = %key, links = links.len(), "Resolved breadcrumb chain");
        Ok(links)
    }
}
