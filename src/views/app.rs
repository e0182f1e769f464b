// ============================================================================
// APP SHELL VIEW - Header con navegación + outlet del router
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{
    append_child, is_plain_left_click, on_click, remove_attribute, set_attribute, toggle_class,
    ElementBuilder,
};
use crate::router::Router;

/// Clase del enlace de la ruta actual
pub const ACTIVE_LINK_CLASS: &str = "router-link-active";

/// Enlace de navegación de una ruta con nombre
pub struct NavLink {
    pub name: &'static str,
    pub element: Element,
}

/// Árbol del shell ya construido (todavía fuera del documento)
pub struct AppShell {
    pub root: Element,
    /// <main class="router-view">: aquí se renderiza la vista actual
    pub outlet: Element,
    pub links: Vec<NavLink>,
}

/// Renderizar el shell de la app
pub fn render_app(router: &Router, title: &str) -> Result<AppShell, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("app-nav").build();

    let mut links = Vec::new();
    for entry in router.table().named_views() {
        let Some(name) = entry.name else { continue };
        let link = render_nav_link(router, name, entry.path)?;
        append_child(&nav, &link)?;
        links.push(NavLink {
            name,
            element: link,
        });
    }

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.class("app-title").text(title).build())?
        .child(nav)?
        .build();

    let outlet = ElementBuilder::new("main")?.class("router-view").build();

    let root = ElementBuilder::new("div")?
        .class("app-shell")
        .children([header, outlet.clone()])?
        .build();

    Ok(AppShell {
        root,
        outlet,
        links,
    })
}

/// <a href> real + navegación sin recarga en click normal
fn render_nav_link(
    router: &Router,
    name: &'static str,
    path: &'static str,
) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class("nav-link")
        .attr("href", &router.href(path))?
        .attr("data-route", name)?
        .text(name)
        .build();

    let router = router.clone();
    on_click(&link, move |event: MouseEvent| {
        if !is_plain_left_click(&event) {
            return;
        }
        event.prevent_default();
        if let Err(e) = router.push(path) {
            log::error!("❌ [NAV] Error navegando a {}: {}", path, e);
        }
    })?;

    Ok(link)
}

/// ¿El enlace `name` corresponde a la ruta actual?
pub fn is_active_link(name: &str, current: Option<&str>) -> bool {
    current == Some(name)
}

/// Marcar el enlace de la ruta actual
pub fn update_active_links(links: &[NavLink], current: Option<&str>) -> Result<(), JsValue> {
    for link in links {
        let active = is_active_link(link.name, current);
        toggle_class(&link.element, ACTIVE_LINK_CLASS, active)?;
        if active {
            set_attribute(&link.element, "aria-current", "page")?;
        } else {
            remove_attribute(&link.element, "aria-current")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route_table;

    #[test]
    fn test_exactly_one_nav_link_active() {
        let table = route_table();
        let names: Vec<_> = table.named_views().filter_map(|e| e.name).collect();

        for current in ["Photos", "Albums", "Random"] {
            let active: Vec<_> = names
                .iter()
                .filter(|name| is_active_link(name, Some(current)))
                .collect();
            assert_eq!(active, vec![&current]);
        }
    }

    #[test]
    fn test_no_nav_link_active_without_route() {
        assert!(!is_active_link("Photos", None));
    }
}
