// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: cuando el elemento se destruye el navegador
//   limpia los listeners asociados, así que closure.forget() es seguro.
// - Listeners globales (window): registrar UNA VEZ al inicio de la app.
//   Quien los registra debe protegerse contra registros múltiples.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Registrar un listener en window. El closure lo mantiene vivo quien llama.
pub fn on_window_event(
    event_type: &str,
    closure: &Closure<dyn FnMut(web_sys::Event)>,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    window.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
}

/// ¿Click "normal"? Con modificadores o botón no principal el navegador
/// debe hacer lo suyo (abrir en pestaña nueva, etc.)
pub fn is_plain_left_click(event: &MouseEvent) -> bool {
    event.button() == 0
        && !event.default_prevented()
        && !(event.meta_key() || event.ctrl_key() || event.shift_key() || event.alt_key())
}
