//! Route table of the shell.
//!
//! Each route maps a URL path either to a page view or to another path.
//! Views are identifiers only; loading them is up to the host.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageView {
    Home,
    Documents,
    Health,
    Calendar,
    Settings,
}

impl PageView {
    /// Name of the component that renders this view.
    pub fn component(&self) -> &'static str {
        match self {
            PageView::Home => "HomePage",
            PageView::Documents => "DocumentsPage",
            PageView::Health => "HealthPage",
            PageView::Calendar => "CalendarPage",
            PageView::Settings => "SettingsPage",
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteTarget {
    View(PageView),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: None,
        target: RouteTarget::Redirect("/home"),
    },
    Route {
        path: "/home",
        name: Some("home"),
        target: RouteTarget::View(PageView::Home),
    },
    Route {
        path: "/documenti",
        name: Some("documenti"),
        target: RouteTarget::View(PageView::Documents),
    },
    Route {
        path: "/salute",
        name: Some("salute"),
        target: RouteTarget::View(PageView::Health),
    },
    Route {
        path: "/calendario",
        name: Some("calendario"),
        target: RouteTarget::View(PageView::Calendar),
    },
    Route {
        path: "/impostazioni",
        name: Some("impostazioni"),
        target: RouteTarget::View(PageView::Settings),
    },
];

/// Route whose path is exactly `path`.
pub fn find_route(path: &str) -> Option<&'static Route> {
    find_route_in(ROUTES, path)
}

pub fn find_route_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == Some(name))
}

/// The route a tab navigates to.
pub fn route_for_tab(tab_id: &str) -> Option<&'static Route> {
    find_route_by_name(tab_id)
}

/// Follow redirects from `path` to the route that renders a view.
pub fn resolve_path(path: &str) -> Option<(&'static Route, PageView)> {
    resolve_path_in(ROUTES, path)
}

fn find_route_in<'r>(routes: &'r [Route], path: &str) -> Option<&'r Route> {
    routes.iter().find(|route| route.path == path)
}

fn resolve_path_in<'r>(routes: &'r [Route], path: &str) -> Option<(&'r Route, PageView)> {
    let mut route = find_route_in(routes, path)?;
    // A chain longer than the table must revisit a route.
    for _ in 0..=routes.len() {
        match route.target {
            RouteTarget::View(view) => return Some((route, view)),
            RouteTarget::Redirect(to) => {
                tracing::debug!(from = route.path, to, "following redirect");
                route = find_route_in(routes, to)?;
            }
        }
    }
    None
}
