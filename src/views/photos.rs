// ============================================================================
// PHOTOS VIEW
// ============================================================================
// Placeholder: el contenido real de la vista (grid, carga de fotos) no forma
// parte del shell.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::ViewId;
use crate::views::render_view_section;

pub fn render_photos() -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("photo-grid").build();
    render_view_section(ViewId::Photos, grid)
}
