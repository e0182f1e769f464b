// ============================================================================
// MATCHER - Normalización de paths y resolución (first match wins)
// ============================================================================
// Reglas de coincidencia:
// - query (?...) y hash (#...) no participan en el match, pero se conservan
// - sin distinguir mayúsculas/minúsculas
// - el slash final es opcional: "/photos/" == "/photos"
// - "" equivale a "/"
// ============================================================================

use crate::error::RouterError;
use crate::models::{Resolution, ResolvedRoute, RouteEntry, RouteTarget};
use crate::router::routes::RouteTable;

/// Máximo de redirects encadenados antes de declarar un loop
pub const MAX_REDIRECTS: usize = 10;

/// Ubicación partida en path / query / hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Incluye el '?' inicial, o vacío
    pub query: String,
    /// Incluye el '#' inicial, o vacío
    pub hash: String,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.find('#') {
            Some(idx) => (&raw[..idx], &raw[idx..]),
            None => (raw, ""),
        };
        let (path, query) = match rest.find('?') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            query: query.to_string(),
            hash: hash.to_string(),
        }
    }

    pub fn full_path(&self) -> String {
        format!("{}{}{}", self.path, self.query, self.hash)
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// ¿El patrón de la entrada coincide con el path?
pub fn path_matches(pattern: &str, path: &str) -> bool {
    trim_trailing_slash(pattern).eq_ignore_ascii_case(trim_trailing_slash(path))
}

/// Primera entrada cuyo patrón coincide
pub fn match_entry<'a>(entries: &'a [RouteEntry], path: &str) -> Option<&'a RouteEntry> {
    entries.iter().find(|entry| path_matches(entry.path, path))
}

/// Resuelve una ubicación contra la tabla siguiendo redirects.
/// Un path sin coincidencia no es error: devuelve `Resolution::NoMatch`.
pub fn resolve(table: &RouteTable, raw: &str) -> Result<Resolution, RouterError> {
    let mut location = Location::parse(raw);
    let mut redirected_from: Option<String> = None;

    for _ in 0..=MAX_REDIRECTS {
        let entry = match match_entry(table.entries(), &location.path) {
            Some(entry) => *entry,
            None => {
                return Ok(Resolution::NoMatch {
                    path: location.full_path(),
                })
            }
        };

        match entry.target {
            RouteTarget::View(view) => {
                let full_path = location.full_path();
                return Ok(Resolution::Matched(ResolvedRoute {
                    path: location.path,
                    full_path,
                    name: entry.name,
                    view,
                    redirected_from,
                }));
            }
            RouteTarget::Redirect(to) => {
                log::debug!("↪️ [ROUTER] {} -> {}", location.path, to);
                if redirected_from.is_none() {
                    redirected_from = Some(location.full_path());
                }
                // El destino hereda query y hash si no trae los suyos
                let target = Location::parse(to);
                location = Location {
                    path: target.path,
                    query: if target.query.is_empty() {
                        location.query
                    } else {
                        target.query
                    },
                    hash: if target.hash.is_empty() {
                        location.hash
                    } else {
                        target.hash
                    },
                };
            }
        }
    }

    Err(RouterError::RedirectLoop {
        path: redirected_from.unwrap_or(location.path),
        limit: MAX_REDIRECTS,
    })
}
