// ============================================================================
// PHOTOS APP - SHELL SPA (RUST PURO + WASM)
// ============================================================================
// Arranque:
// - Router: tabla de rutas + History API del navegador
// - App: shell (nav + outlet), recibe el router por inyección
// - Mount: se engancha a #app (configurable) en el documento ya cargado
// Rutas: "/" -> "/photos", "/photos", "/albums", "/random"
// ============================================================================

pub mod app;
pub mod config;
mod dom;
pub mod error;
pub mod models;
pub mod router;
mod state;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use crate::app::App;
pub use crate::dom::{BrowserDocument, MountHost};

use crate::config::CONFIG;
use crate::error::MountError;
use crate::router::{route_table, Router, WebHistory};

// Instancia única de la app durante toda la sesión
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Photos App - Rust Puro");
    log::debug!("⚙️ Config: {}", CONFIG.to_json());

    let router = Router::new(route_table(), WebHistory::new(&CONFIG.router_base));
    router.start().map_err(MountError::from)?;

    // Sin ancla no hay app: el error sale tal cual hacia JS
    let mut app = App::new(router, CONFIG.clone());
    app.mount(&BrowserDocument)?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Router de la app ya arrancada
fn app_router() -> Option<Router> {
    APP.with(|app_cell| app_cell.borrow().as_ref().map(|app| app.router().clone()))
}

/// Navegar desde JavaScript (equivale a un click en un enlace)
#[wasm_bindgen]
pub fn navigate(path: &str) -> Result<(), JsValue> {
    let router = app_router().ok_or_else(|| JsValue::from_str("App no está inicializada"))?;
    router.push(path).map_err(JsValue::from)
}

/// Nombre de la ruta actual ("Photos", "Albums", "Random"), o undefined
#[wasm_bindgen]
pub fn current_route_name() -> Option<String> {
    app_router()?
        .current_route()
        .and_then(|route| route.name)
        .map(str::to_string)
}
