// ============================================================================
// ROUTE TABLE - Tabla estática de rutas de la app
// ============================================================================

use std::collections::HashSet;
use std::rc::Rc;

use crate::error::RouterError;
use crate::models::{RouteEntry, ViewId};

/// Tabla de la app, en orden de coincidencia. Es la API pública de navegación:
/// cambiarla rompe bookmarks y enlaces.
const ROUTES: [RouteEntry; 4] = [
    RouteEntry::redirect("/", "/photos"),
    RouteEntry::view("/photos", "Photos", ViewId::Photos),
    RouteEntry::view("/albums", "Albums", ViewId::Albums),
    RouteEntry::view("/random", "Random", ViewId::Random),
];

/// Lista ordenada e inmutable de entradas
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Rc<[RouteEntry]>,
}

impl RouteTable {
    /// Construye una tabla validando que los nombres sean únicos
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouterError> {
        let mut seen = HashSet::new();
        for name in entries.iter().filter_map(|entry| entry.name) {
            if !seen.insert(name) {
                return Err(RouterError::DuplicateName(name.to_string()));
            }
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == Some(name))
    }

    /// Entradas con nombre que renderizan una vista (las que van en la nav)
    pub fn named_views(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.name.is_some() && !entry.is_redirect())
    }
}

/// Tabla de rutas de la app. No tiene efectos y no falla.
pub fn route_table() -> RouteTable {
    RouteTable {
        entries: Rc::new(ROUTES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteTarget;

    #[test]
    fn test_table_has_four_entries_in_order() {
        let table = route_table();
        let paths: Vec<_> = table.entries().iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/photos", "/albums", "/random"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_root_is_a_redirect_without_name() {
        let table = route_table();
        let root = &table.entries()[0];
        assert_eq!(root.target, RouteTarget::Redirect("/photos"));
        assert_eq!(root.name, None);
    }

    #[test]
    fn test_named_entries_bind_views() {
        let table = route_table();
        assert_eq!(
            table.find_by_name("Photos").map(|e| e.target),
            Some(RouteTarget::View(ViewId::Photos))
        );
        assert_eq!(
            table.find_by_name("Albums").map(|e| e.target),
            Some(RouteTarget::View(ViewId::Albums))
        );
        assert_eq!(
            table.find_by_name("Random").map(|e| e.target),
            Some(RouteTarget::View(ViewId::Random))
        );
        assert!(table.find_by_name("Videos").is_none());
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let table = route_table();
        assert!(RouteTable::new(table.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = RouteTable::new(vec![
            RouteEntry::view("/photos", "Photos", ViewId::Photos),
            RouteEntry::view("/pictures", "Photos", ViewId::Photos),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RouterError::DuplicateName("Photos".to_string())
        );
    }

    #[test]
    fn test_nav_lists_only_named_views() {
        let table = route_table();
        let names: Vec<_> = table.named_views().filter_map(|e| e.name).collect();
        assert_eq!(names, vec!["Photos", "Albums", "Random"]);
    }
}
