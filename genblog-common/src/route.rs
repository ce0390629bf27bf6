//! Path → page resolution.
//!
//! The route table is fixed. Anything that does not match one of its
//! patterns resolves to [`Route::Home`] with `redirected` set, which callers
//! use to rewrite the location to `/`.

use std::fmt;

/// Numeric id segment of a detail route.
///
/// Parsing never fails at the router level: a segment that is not a `u32`
/// still matches and is handed to the detail view as `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteParam {
    Valid(u32),
    Invalid(String),
}

impl RouteParam {
    pub fn parse(raw: &str) -> Self {
        raw.parse::<u32>()
            .map(RouteParam::Valid)
            .unwrap_or_else(|_| RouteParam::Invalid(raw.to_string()))
    }
}

impl fmt::Display for RouteParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteParam::Valid(id) => write!(f, "{id}"),
            RouteParam::Invalid(raw) => f.write_str(raw),
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Articles,
    Authors,
    AuthorDetail(RouteParam),
    PostDetail(RouteParam),
    About,
    Contact,
}

/// Outcome of resolving a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    /// The requested path was not in the table and was sent to `/`.
    pub redirected: bool,
}

impl Navigation {
    /// Canonical location after this navigation.
    pub fn location(&self) -> String {
        self.route.path()
    }
}

impl Route {
    /// Match a path against the route table.
    ///
    /// Query strings and fragments are ignored and one trailing slash is
    /// tolerated. Returns `None` for paths outside the table.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return Some(Route::Home);
        }

        // Literal segments match case-insensitively, ids are taken verbatim.
        let mut segments = path.split('/');
        let head = segments.next().unwrap_or_default().to_ascii_lowercase();
        let rest: Vec<&str> = segments.collect();
        match (head.as_str(), rest.as_slice()) {
            ("articles", []) => Some(Route::Articles),
            ("authors", []) => Some(Route::Authors),
            ("about", []) => Some(Route::About),
            ("contact", []) => Some(Route::Contact),
            ("author", [id]) if !id.is_empty() => {
                Some(Route::AuthorDetail(RouteParam::parse(id)))
            }
            ("post", [id]) if !id.is_empty() => Some(Route::PostDetail(RouteParam::parse(id))),
            _ => None,
        }
    }

    /// Resolve a path, falling back to home for anything unmatched.
    pub fn resolve(path: &str) -> Navigation {
        match Route::parse(path) {
            Some(route) => Navigation {
                route,
                redirected: false,
            },
            None => {
                tracing::debug!(path, "unmatched path, redirecting to /");
                Navigation {
                    route: Route::Home,
                    redirected: true,
                }
            }
        }
    }

    /// Canonical href for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Articles => "/articles".to_string(),
            Route::Authors => "/authors".to_string(),
            Route::AuthorDetail(param) => format!("/author/{param}"),
            Route::PostDetail(param) => format!("/post/{param}"),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
        }
    }

    /// Short name used in logs and page titles.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Articles => "articles",
            Route::Authors => "authors",
            Route::AuthorDetail(_) => "author",
            Route::PostDetail(_) => "post",
            Route::About => "about",
            Route::Contact => "contact",
        }
    }

    /// The route table as `(pattern, name)` pairs.
    pub fn table() -> &'static [(&'static str, &'static str)] {
        &[
            ("/", "home"),
            ("/articles", "articles"),
            ("/authors", "authors"),
            ("/author/{id}", "author"),
            ("/post/{id}", "post"),
            ("/about", "about"),
            ("/contact", "contact"),
        ]
    }

    /// Routes without parameters, in navigation order.
    pub fn static_routes() -> [Route; 5] {
        [
            Route::Home,
            Route::Articles,
            Route::Authors,
            Route::About,
            Route::Contact,
        ]
    }
}
