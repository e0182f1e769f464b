// ============================================================================
// RANDOM VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::ViewId;
use crate::views::render_view_section;

pub fn render_random() -> Result<Element, JsValue> {
    let frame = ElementBuilder::new("figure")?.class("random-photo").build();
    render_view_section(ViewId::Random, frame)
}
