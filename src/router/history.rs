// ============================================================================
// HISTORY - Estrategias de historial de navegación
// ============================================================================
// WebHistory: History API nativo del navegador (pushState / popstate), paths
// reales en la barra de direcciones. El servidor debe servir el mismo
// index.html para todos los paths de la app.
// MemoryHistory: pila en memoria, sin navegador (tests).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::dom::on_window_event;
use crate::error::{js_error_message, RouterError};

/// Callback de back/forward: recibe la nueva ubicación (relativa a la base)
pub type PopListener = Rc<dyn Fn(String)>;

pub trait History {
    /// Ubicación actual relativa a la base: path + query + hash
    fn location(&self) -> String;

    /// Agrega una entrada nueva al historial
    fn push(&self, to: &str) -> Result<(), RouterError>;

    /// Reemplaza la entrada actual
    fn replace(&self, to: &str) -> Result<(), RouterError>;

    /// Mueve el cursor del historial; el cambio llega por el listener
    fn go(&self, delta: i32) -> Result<(), RouterError>;

    /// Registra el listener de back/forward. Solo se registra una vez.
    fn listen(&self, listener: PopListener) -> Result<(), RouterError>;

    /// href real para un path de la app (con base)
    fn create_href(&self, to: &str) -> String;
}

/// "/" -> "", "gallery/" -> "/gallery"
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Quita la base de un pathname del navegador
pub fn strip_base(pathname: &str, base: &str) -> String {
    if base.is_empty() {
        return pathname.to_string();
    }
    let matches_base = pathname
        .get(..base.len())
        .map(|prefix| prefix.eq_ignore_ascii_case(base))
        .unwrap_or(false);
    if !matches_base {
        return pathname.to_string();
    }
    let rest = &pathname[base.len()..];
    if rest.is_empty() {
        "/".to_string()
    } else if rest.starts_with('/') {
        rest.to_string()
    } else {
        // "/galleryx" no está bajo la base "/gallery"
        pathname.to_string()
    }
}

fn join_href(base: &str, to: &str) -> String {
    if to.starts_with('/') {
        format!("{}{}", base, to)
    } else {
        format!("{}/{}", base, to)
    }
}

// ----------------------------------------------------------------------------
// WebHistory
// ----------------------------------------------------------------------------

pub struct WebHistory {
    base: String,
    listening: Cell<bool>,
}

impl WebHistory {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            listening: Cell::new(false),
        }
    }

    fn browser_history() -> Result<web_sys::History, RouterError> {
        web_sys::window()
            .ok_or_else(|| RouterError::History("No window".to_string()))?
            .history()
            .map_err(|e| RouterError::History(js_error_message(&e)))
    }

    fn read_location(base: &str) -> String {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return "/".to_string();
        };
        let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        format!("{}{}{}", strip_base(&pathname, base), search, hash)
    }
}

impl History for WebHistory {
    fn location(&self) -> String {
        Self::read_location(&self.base)
    }

    fn push(&self, to: &str) -> Result<(), RouterError> {
        let href = self.create_href(to);
        Self::browser_history()?
            .push_state_with_url(&JsValue::NULL, "", Some(href.as_str()))
            .map_err(|e| RouterError::History(js_error_message(&e)))
    }

    fn replace(&self, to: &str) -> Result<(), RouterError> {
        let href = self.create_href(to);
        Self::browser_history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(href.as_str()))
            .map_err(|e| RouterError::History(js_error_message(&e)))
    }

    fn go(&self, delta: i32) -> Result<(), RouterError> {
        Self::browser_history()?
            .go_with_delta(delta)
            .map_err(|e| RouterError::History(js_error_message(&e)))
    }

    fn listen(&self, listener: PopListener) -> Result<(), RouterError> {
        // Listener global: registrar UNA sola vez, si no se acumulan
        if self.listening.replace(true) {
            log::warn!("⚠️ [HISTORY] popstate listener ya registrado, ignorando");
            return Ok(());
        }

        let base = self.base.clone();
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            listener(WebHistory::read_location(&base));
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(e) = on_window_event("popstate", &closure) {
            self.listening.set(false);
            return Err(RouterError::History(js_error_message(&e)));
        }
        // Vive toda la sesión
        closure.forget();
        Ok(())
    }

    fn create_href(&self, to: &str) -> String {
        join_href(&self.base, to)
    }
}

// ----------------------------------------------------------------------------
// MemoryHistory
// ----------------------------------------------------------------------------

pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    position: Cell<usize>,
    listener: RefCell<Option<PopListener>>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial.to_string()]),
            position: Cell::new(0),
            listener: RefCell::new(None),
        }
    }

    /// Copia de la pila (para inspección)
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn position(&self) -> usize {
        self.position.get()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries.borrow()[self.position.get()].clone()
    }

    fn push(&self, to: &str) -> Result<(), RouterError> {
        let mut entries = self.entries.borrow_mut();
        let next = self.position.get() + 1;
        // Push descarta las entradas "forward"
        entries.truncate(next);
        entries.push(to.to_string());
        self.position.set(next);
        Ok(())
    }

    fn replace(&self, to: &str) -> Result<(), RouterError> {
        self.entries.borrow_mut()[self.position.get()] = to.to_string();
        Ok(())
    }

    fn go(&self, delta: i32) -> Result<(), RouterError> {
        let len = self.entries.borrow().len() as i64;
        let target = self.position.get() as i64 + i64::from(delta);
        if delta == 0 || target < 0 || target >= len {
            return Ok(());
        }
        self.position.set(target as usize);

        // Soltar los borrows antes de avisar: el listener puede hacer replace()
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(self.location());
        }
        Ok(())
    }

    fn listen(&self, listener: PopListener) -> Result<(), RouterError> {
        *self.listener.borrow_mut() = Some(listener);
        Ok(())
    }

    fn create_href(&self, to: &str) -> String {
        to.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/gallery/"), "/gallery");
        assert_eq!(normalize_base("gallery"), "/gallery");
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/photos", ""), "/photos");
        assert_eq!(strip_base("/gallery/albums", "/gallery"), "/albums");
        assert_eq!(strip_base("/gallery", "/gallery"), "/");
        assert_eq!(strip_base("/galleryx/albums", "/gallery"), "/galleryx/albums");
        assert_eq!(strip_base("/other", "/gallery"), "/other");
    }

    #[test]
    fn test_web_history_href_uses_base() {
        assert_eq!(WebHistory::new("/").create_href("/photos"), "/photos");
        assert_eq!(WebHistory::new("/gallery/").create_href("/photos"), "/gallery/photos");
    }

    #[test]
    fn test_memory_push_truncates_forward_entries() {
        let history = MemoryHistory::new("/photos");
        history.push("/albums").unwrap();
        history.push("/random").unwrap();
        history.go(-2).unwrap();
        assert_eq!(history.location(), "/photos");

        history.push("/random").unwrap();
        assert_eq!(history.entries(), vec!["/photos", "/random"]);
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_memory_go_notifies_listener() {
        let history = MemoryHistory::new("/photos");
        history.push("/albums").unwrap();

        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = seen.clone();
        history
            .listen(Rc::new(move |location: String| sink.borrow_mut().push(location)))
            .unwrap();

        history.go(-1).unwrap();
        history.go(-1).unwrap(); // fuera de rango: sin efecto
        history.go(1).unwrap();
        assert_eq!(*seen.borrow(), vec!["/photos", "/albums"]);
    }

    #[test]
    fn test_memory_replace_keeps_position() {
        let history = MemoryHistory::new("/");
        history.replace("/photos").unwrap();
        assert_eq!(history.entries(), vec!["/photos"]);
        assert_eq!(history.position(), 0);
    }
}
