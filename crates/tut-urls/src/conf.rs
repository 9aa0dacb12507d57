//! Named route table.

use std::collections::{BTreeMap, HashMap};

use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::error::UrlError;
use crate::pattern::Pattern;

/// A concrete path matched back to its route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    pub name: String,
    pub pattern: String,
    /// Captured placeholder values, percent-decoded.
    pub params: BTreeMap<String, String>,
}

/// A registered route, as listed by [`UrlConf::routes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub name: String,
    pub pattern: String,
}

struct Route {
    name: String,
    pattern: Pattern,
}

/// Maps route names to path patterns and back.
///
/// `reverse` goes from name to path; `resolve` goes from path to name using
/// a `matchit` router over the same patterns.
pub struct UrlConf {
    router: matchit::Router<usize>,
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl UrlConf {
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: matchit::Router::new(),
            routes: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register `pattern` under `name`.
    ///
    /// # Errors
    ///
    /// `DuplicateName` if the name is taken, `InvalidPattern` for a malformed
    /// pattern, `Conflict` if the matcher rejects it next to existing routes.
    pub fn add(&mut self, pattern: &str, name: &str) -> Result<(), UrlError> {
        if self.by_name.contains_key(name) {
            return Err(UrlError::DuplicateName {
                name: name.to_string(),
            });
        }
        let parsed = Pattern::parse(pattern)?;

        let idx = self.routes.len();
        self.router
            .insert(pattern, idx)
            .map_err(|e| UrlError::Conflict {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        self.routes.push(Route {
            name: name.to_string(),
            pattern: parsed,
        });
        self.by_name.insert(name.to_string(), idx);
        tracing::debug!(name, pattern, "registered route");
        Ok(())
    }

    /// Chaining form of [`Self::add`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::add`].
    pub fn path(mut self, pattern: &str, name: &str) -> Result<Self, UrlError> {
        self.add(pattern, name)?;
        Ok(self)
    }

    /// Path of a route that takes no arguments.
    ///
    /// # Errors
    ///
    /// `NoReverseMatch` for an unknown name, `MissingArgument` if the route
    /// has placeholders.
    pub fn reverse(&self, name: &str) -> Result<String, UrlError> {
        self.reverse_with(name, &[])
    }

    /// Path of a route with its placeholders filled from `args`.
    ///
    /// # Errors
    ///
    /// `NoReverseMatch` for an unknown name, `UnexpectedArgument` for a key
    /// the pattern does not use, `MissingArgument` for an absent or empty value.
    pub fn reverse_with(&self, name: &str, args: &[(&str, &str)]) -> Result<String, UrlError> {
        let route = self
            .by_name
            .get(name)
            .map(|&idx| &self.routes[idx])
            .ok_or_else(|| UrlError::NoReverseMatch {
                name: name.to_string(),
            })?;

        if let Some((key, _)) = args
            .iter()
            .find(|(key, _)| !route.pattern.params().any(|p| p == *key))
        {
            return Err(UrlError::UnexpectedArgument {
                name: name.to_string(),
                argument: (*key).to_string(),
            });
        }

        route
            .pattern
            .fill(|param| args.iter().find(|(key, _)| *key == param).map(|(_, v)| *v))
            .map_err(|argument| UrlError::MissingArgument {
                name: name.to_string(),
                argument,
            })
    }

    /// Match a concrete path (query string and fragment ignored) to its route.
    ///
    /// # Errors
    ///
    /// `NoMatch` if no registered pattern matches, or if a captured segment
    /// does not percent-decode to valid UTF-8.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, UrlError> {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let matched = self.router.at(bare).map_err(|_| UrlError::NoMatch {
            path: path.to_string(),
        })?;

        let route = &self.routes[*matched.value];
        let params = matched
            .params
            .iter()
            .map(|(key, value)| {
                percent_decode_str(value)
                    .decode_utf8()
                    .map(|decoded| (key.to_string(), decoded.into_owned()))
                    .map_err(|_| {
                        tracing::warn!(path, param = key, "path segment is not valid UTF-8");
                        UrlError::NoMatch {
                            path: path.to_string(),
                        }
                    })
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(ResolvedRoute {
            name: route.name.clone(),
            pattern: route.pattern.as_str().to_string(),
            params,
        })
    }

    /// Registered routes in registration order.
    #[must_use]
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.routes
            .iter()
            .map(|route| RouteInfo {
                name: route.name.clone(),
                pattern: route.pattern.as_str().to_string(),
            })
            .collect()
    }
}

impl Default for UrlConf {
    fn default() -> Self {
        Self::new()
    }
}
