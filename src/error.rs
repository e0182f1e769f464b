// ============================================================================
// ERRORES - Router y montaje
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errores del router (resolución y navegación)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Cadena de redirects más larga que el límite
    #[error("redirect loop while resolving {path} (more than {limit} redirects)")]
    RedirectLoop { path: String, limit: usize },

    /// push_named con un nombre que no existe en la tabla
    #[error("no route named {0:?}")]
    UnknownRouteName(String),

    /// Dos entradas con el mismo nombre
    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    /// Fallo del History API del navegador
    #[error("history error: {0}")]
    History(String),
}

/// Errores del paso de montaje. Todos son fatales en el arranque.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("mount anchor #{0} not found in document")]
    AnchorNotFound(String),

    #[error("no document available")]
    NoDocument,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error(transparent)]
    Router(#[from] RouterError),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Dom(js_error_message(&value))
    }
}

impl From<RouterError> for JsValue {
    fn from(error: RouterError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<MountError> for JsValue {
    fn from(error: MountError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Texto legible de un error JS (solo en wasm)
pub(crate) fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
