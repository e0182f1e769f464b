// ============================================================================
// APP - Raíz de la aplicación y paso de montaje
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{append_child, clear_children, MountHost};
use crate::error::{js_error_message, MountError};
use crate::models::{Resolution, ViewId};
use crate::router::Router;
use crate::views::{render_app, render_view, update_active_links, NavLink};

/// Aplicación principal. El router se inyecta; no hay instancias globales
/// salvo la que lib.rs guarda después del arranque.
pub struct App {
    router: Router,
    config: AppConfig,
    mounted: bool,
}

impl App {
    pub fn new(router: Router, config: AppConfig) -> Self {
        Self {
            router,
            config,
            mounted: false,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Montar la app en el ancla `#<mount_id>`.
    ///
    /// Si el ancla no existe falla antes de escribir nada en el documento.
    /// Montar dos veces no está soportado: la segunda llamada solo avisa.
    pub fn mount(&mut self, host: &dyn MountHost) -> Result<(), MountError> {
        if self.mounted {
            log::warn!("⚠️ [MOUNT] La app ya está montada, mount() ignorado");
            return Ok(());
        }

        let id = self.config.mount_id.as_str();
        let root = host
            .find_anchor(id)?
            .ok_or_else(|| MountError::AnchorNotFound(id.to_string()))?;

        // El shell se arma fuera del documento y se inserta de una vez
        let shell = render_app(&self.router, &self.config.app_title)?;
        render_outlet(&shell.outlet, &shell.links, self.router.current().as_ref())?;

        clear_children(&root);
        append_child(&root, &shell.root)?;

        let outlet = shell.outlet;
        let links = shell.links;
        self.router.subscribe(move |current| {
            if let Err(e) = render_outlet(&outlet, &links, current.as_ref()) {
                log::error!("❌ [APP] Error renderizando la vista: {}", js_error_message(&e));
            }
        });

        self.mounted = true;
        log::info!("✅ [MOUNT] App montada en #{}", id);
        Ok(())
    }
}

/// Qué muestra el outlet y qué enlace queda activo para una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutletState {
    pub view: Option<ViewId>,
    pub active_link: Option<&'static str>,
}

impl OutletState {
    /// Sin ruta resuelta o sin coincidencia: outlet vacío, ningún enlace activo
    pub fn for_route(current: Option<&Resolution>) -> Self {
        Self {
            view: current.and_then(Resolution::view),
            active_link: current.and_then(Resolution::name),
        }
    }
}

/// Reemplaza el contenido del outlet por la vista de la ruta actual
fn render_outlet(
    outlet: &Element,
    links: &[NavLink],
    current: Option<&Resolution>,
) -> Result<(), JsValue> {
    let state = OutletState::for_route(current);
    clear_children(outlet);
    if let Some(view) = state.view {
        append_child(outlet, &render_view(view)?)?;
    }
    update_active_links(links, state.active_link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{route_table, MemoryHistory};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Documento sin el ancla; registra qué ids se buscaron
    struct EmptyDocument {
        lookups: RefCell<Vec<String>>,
    }

    impl MountHost for EmptyDocument {
        fn find_anchor(&self, id: &str) -> Result<Option<Element>, MountError> {
            self.lookups.borrow_mut().push(id.to_string());
            Ok(None)
        }
    }

    struct NoDocument;

    impl MountHost for NoDocument {
        fn find_anchor(&self, _id: &str) -> Result<Option<Element>, MountError> {
            Err(MountError::NoDocument)
        }
    }

    fn started_app(config: AppConfig) -> App {
        let router = Router::new(route_table(), MemoryHistory::new("/"));
        router.start().unwrap();
        App::new(router, config)
    }

    #[test]
    fn test_mount_without_anchor_fails() {
        let mut app = started_app(AppConfig::default());
        let host = EmptyDocument {
            lookups: RefCell::new(Vec::new()),
        };

        let err = app.mount(&host).unwrap_err();
        assert_eq!(err, MountError::AnchorNotFound("app".to_string()));
        assert_eq!(*host.lookups.borrow(), vec!["app"]);
        assert!(!app.is_mounted());
    }

    #[test]
    fn test_mount_uses_configured_anchor_id() {
        let config = AppConfig {
            mount_id: "gallery-root".to_string(),
            ..AppConfig::default()
        };
        let mut app = started_app(config);
        let host = EmptyDocument {
            lookups: RefCell::new(Vec::new()),
        };

        assert_eq!(
            app.mount(&host).unwrap_err(),
            MountError::AnchorNotFound("gallery-root".to_string())
        );
        assert_eq!(*host.lookups.borrow(), vec!["gallery-root"]);
    }

    #[test]
    fn test_mount_without_document_fails() {
        let mut app = started_app(AppConfig::default());
        assert_eq!(app.mount(&NoDocument).unwrap_err(), MountError::NoDocument);
        assert!(!app.is_mounted());
    }

    #[test]
    fn test_failed_mount_leaves_router_usable() {
        let mut app = started_app(AppConfig::default());
        let host = EmptyDocument {
            lookups: RefCell::new(Vec::new()),
        };
        assert!(app.mount(&host).is_err());

        app.router().push("/albums").unwrap();
        assert_eq!(
            app.router().current_route().map(|r| r.name),
            Some(Some("Albums"))
        );
    }

    #[test]
    fn test_outlet_state_follows_navigation() {
        let router = Router::new(route_table(), MemoryHistory::new("/"));
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = states.clone();
        router.subscribe(move |current| {
            sink.borrow_mut().push(OutletState::for_route(current.as_ref()));
        });

        router.start().unwrap();
        router.push("/albums").unwrap();
        router.push("/videos").unwrap();
        router.push_named("Random").unwrap();

        let photos = OutletState {
            view: Some(ViewId::Photos),
            active_link: Some("Photos"),
        };
        let albums = OutletState {
            view: Some(ViewId::Albums),
            active_link: Some("Albums"),
        };
        let empty = OutletState {
            view: None,
            active_link: None,
        };
        let random = OutletState {
            view: Some(ViewId::Random),
            active_link: Some("Random"),
        };
        assert_eq!(*states.borrow(), vec![photos, albums, empty, random]);
    }

    #[test]
    fn test_outlet_empty_before_first_navigation() {
        assert_eq!(
            OutletState::for_route(None),
            OutletState {
                view: None,
                active_link: None,
            }
        );
    }

    // Montar dos veces sobre la misma ancla no está soportado; no se testea
    // un resultado concreto (necesita un documento real).
}
