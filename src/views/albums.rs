// ============================================================================
// ALBUMS VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::ViewId;
use crate::views::render_view_section;

pub fn render_albums() -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?.class("album-list").build();
    render_view_section(ViewId::Albums, list)
}
