//! Stand-in router — watches the selected path and picks the page to show.
//!
//! The panel never navigates. Each frame the app hands the selected path to
//! [`Router::observe`], which reports a navigation when it changed.

use tracing::{info, warn};

use navpanel_core::RouteModel;

/// Page resolved for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
    pub title: String,
    pub found: bool,
}

impl Page {
    pub fn resolve(path: &str, routes: &RouteModel) -> Self {
        match routes.find_by_path(path) {
            Some((_, entry)) => Self {
                path: path.to_string(),
                title: entry.label.clone(),
                found: true,
            },
            None => Self {
                path: path.to_string(),
                title: "Not found".to_string(),
                found: false,
            },
        }
    }
}

#[derive(Debug)]
pub struct Router {
    current: Page,
    navigations: usize,
}

impl Router {
    pub fn new(initial_path: &str, routes: &RouteModel) -> Self {
        Self {
            current: Page::resolve(initial_path, routes),
            navigations: 0,
        }
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    /// Number of navigations since start.
    pub fn navigations(&self) -> usize {
        self.navigations
    }

    /// Follow the selected path. Returns the new page if it changed.
    pub fn observe(&mut self, selected_path: &str, routes: &RouteModel) -> Option<&Page> {
        if self.current.path == selected_path {
            return None;
        }
        let page = Page::resolve(selected_path, routes);
        if page.found {
            info!(from = %self.current.path, to = %page.path, "navigate");
        } else {
            warn!(path = %page.path, "navigate to unknown path");
        }
        self.current = page;
        self.navigations += 1;
        Some(&self.current)
    }
}
