//! Dashboard routes
//!
//! The web dashboard exposes three views. Their URL paths are accepted by the
//! `open` command so a link copied from the browser opens the same view here.

use super::prefix::PathPrefix;
use crate::utils::{decode_path_segment, encode_path_segment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    /// `/`
    Dashboard,
    /// `/project/:name`
    Project { name: String },
    /// `/results`
    Results,
}

impl Route {
    /// Match a dashboard URL path, which may carry the deployment prefix.
    ///
    /// Query strings and fragments are ignored, as is a single trailing slash.
    pub(crate) fn parse(path: &str, prefix: &PathPrefix) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let path = prefix.strip(path)?;
        let path = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] => Some(Route::Dashboard),
            ["results"] => Some(Route::Results),
            ["project", name] if !name.is_empty() => Some(Route::Project {
                name: decode_path_segment(name),
            }),
            _ => None,
        }
    }

    /// Path of this route under the given prefix
    pub(crate) fn href(&self, prefix: &PathPrefix) -> String {
        let path = match self {
            Route::Dashboard => "/".to_string(),
            Route::Project { name } => format!("/project/{}", encode_path_segment(name)),
            Route::Results => "/results".to_string(),
        };
        if path == "/" && !prefix.is_empty() {
            // The router serves the prefix itself, not `<prefix>/`.
            return prefix.to_string();
        }
        prefix.apply(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(raw: &str) -> PathPrefix {
        PathPrefix::resolve([Some(raw)])
    }

    #[test]
    fn parse_without_prefix() {
        let none = PathPrefix::default();
        assert_eq!(Route::parse("/", &none), Some(Route::Dashboard));
        assert_eq!(Route::parse("", &none), Some(Route::Dashboard));
        assert_eq!(Route::parse("/results", &none), Some(Route::Results));
        assert_eq!(Route::parse("/results/", &none), Some(Route::Results));
        assert_eq!(
            Route::parse("/project/web", &none),
            Some(Route::Project {
                name: "web".to_string()
            })
        );
    }

    #[test]
    fn parse_with_prefix() {
        let app = prefix("/app");
        assert_eq!(Route::parse("/app", &app), Some(Route::Dashboard));
        assert_eq!(Route::parse("/app/", &app), Some(Route::Dashboard));
        assert_eq!(Route::parse("/app/results", &app), Some(Route::Results));
        assert_eq!(Route::parse("/results", &app), None);
        assert_eq!(Route::parse("/apple/results", &app), None);
    }

    #[test]
    fn parse_ignores_query_and_fragment() {
        let none = PathPrefix::default();
        assert_eq!(
            Route::parse("/results?status=failed", &none),
            Some(Route::Results)
        );
        assert_eq!(Route::parse("/#top", &none), Some(Route::Dashboard));
    }

    #[test]
    fn parse_decodes_project_name() {
        let none = PathPrefix::default();
        assert_eq!(
            Route::parse("/project/web%20app", &none),
            Some(Route::Project {
                name: "web app".to_string()
            })
        );
    }

    #[test]
    fn parse_rejects_unknown_paths() {
        let none = PathPrefix::default();
        assert_eq!(Route::parse("/project", &none), None);
        assert_eq!(Route::parse("/project/", &none), None);
        assert_eq!(Route::parse("/project/a/b", &none), None);
        assert_eq!(Route::parse("/settings", &none), None);
    }

    #[test]
    fn href_round_trips_through_parse() {
        let app = prefix("app");
        let routes = [
            Route::Dashboard,
            Route::Results,
            Route::Project {
                name: "team/web app".to_string(),
            },
        ];
        for route in routes {
            let href = route.href(&app);
            assert!(href.starts_with("/app"), "{href}");
            assert_eq!(Route::parse(&href, &app), Some(route));
        }
    }

    #[test]
    fn href_without_prefix() {
        let none = PathPrefix::default();
        assert_eq!(Route::Dashboard.href(&none), "/");
        assert_eq!(Route::Results.href(&none), "/results");
    }
}
