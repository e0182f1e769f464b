// ============================================================================
// ROUTE MODEL - Entradas de la tabla de rutas y resultado de resolución
// ============================================================================

/// Vistas de página que el router puede renderizar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Photos,
    Albums,
    Random,
}

impl ViewId {
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Photos => "Photos",
            ViewId::Albums => "Albums",
            ViewId::Random => "Random",
        }
    }

    /// Clase CSS de la sección raíz de la vista
    pub fn css_class(&self) -> &'static str {
        match self {
            ViewId::Photos => "view-photos",
            ViewId::Albums => "view-albums",
            ViewId::Random => "view-random",
        }
    }
}

/// Qué hace una entrada cuando su path coincide: renderizar o redirigir
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub const fn view(path: &'static str, name: &'static str, view: ViewId) -> Self {
        Self {
            path,
            name: Some(name),
            target: RouteTarget::View(view),
        }
    }

    pub const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            target: RouteTarget::Redirect(to),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }
}

/// Ruta ya resuelta a una vista
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Path normalizado que coincidió (sin query ni hash)
    pub path: String,
    /// Path + query + hash, lo que se escribe en la barra de direcciones
    pub full_path: String,
    pub name: Option<&'static str>,
    pub view: ViewId,
    /// Ubicación original si se siguió algún redirect
    pub redirected_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(ResolvedRoute),
    /// Ninguna entrada coincide: no se renderiza nada en el outlet
    NoMatch { path: String },
}

impl Resolution {
    pub fn full_path(&self) -> &str {
        match self {
            Resolution::Matched(route) => &route.full_path,
            Resolution::NoMatch { path } => path,
        }
    }

    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::NoMatch { .. } => None,
        }
    }

    pub fn view(&self) -> Option<ViewId> {
        self.route().map(|route| route.view)
    }

    pub fn name(&self) -> Option<&'static str> {
        self.route().and_then(|route| route.name)
    }

    /// ¿Misma ubicación? Dos rutas resueltas son la misma si llevan a la misma
    /// vista con la misma query y hash, aunque el path difiera en mayúsculas o
    /// slash final ("/Photos" y "/photos/").
    pub fn is_same_location(&self, other: &Resolution) -> bool {
        match (self, other) {
            (Resolution::Matched(a), Resolution::Matched(b)) => {
                a.view == b.view && a.query_and_hash() == b.query_and_hash()
            }
            (Resolution::NoMatch { path: a }, Resolution::NoMatch { path: b }) => a == b,
            _ => false,
        }
    }
}

impl ResolvedRoute {
    /// Lo que sigue al path en `full_path` ("?q=1#top" o vacío)
    pub fn query_and_hash(&self) -> &str {
        self.full_path.get(self.path.len()..).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(path: &str, full_path: &str) -> Resolution {
        Resolution::Matched(ResolvedRoute {
            path: path.to_string(),
            full_path: full_path.to_string(),
            name: Some("Photos"),
            view: ViewId::Photos,
            redirected_from: None,
        })
    }

    #[test]
    fn test_same_location_ignores_path_spelling() {
        let current = photos("/Photos", "/Photos");
        assert!(current.is_same_location(&photos("/photos", "/photos")));

        let current = photos("/photos/", "/photos/#a");
        assert!(current.is_same_location(&photos("/photos", "/photos#a")));
    }

    #[test]
    fn test_same_location_compares_query_and_hash() {
        let plain = photos("/photos", "/photos");
        assert!(!plain.is_same_location(&photos("/photos", "/photos?page=2")));
        assert!(!plain.is_same_location(&photos("/photos", "/photos#top")));
    }

    #[test]
    fn test_no_match_is_never_the_same_as_a_view() {
        let missing = Resolution::NoMatch {
            path: "/photos".to_string(),
        };
        assert!(!missing.is_same_location(&photos("/photos", "/photos")));
        assert!(missing.is_same_location(&missing.clone()));
    }
}
