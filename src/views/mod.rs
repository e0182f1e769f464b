pub mod albums;
pub mod app;
pub mod photos;
pub mod random;

pub use albums::render_albums;
pub use app::{render_app, update_active_links, NavLink};
pub use photos::render_photos;
pub use random::render_random;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::ViewId;

/// Renderizar la vista de una ruta
pub fn render_view(view: ViewId) -> Result<Element, JsValue> {
    match view {
        ViewId::Photos => render_photos(),
        ViewId::Albums => render_albums(),
        ViewId::Random => render_random(),
    }
}

/// <section class="view view-xxx"><h2>Título</h2>{body}</section>
pub(crate) fn render_view_section(view: ViewId, body: Element) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h2")?
        .class("view-title")
        .text(view.title())
        .build();
    Ok(ElementBuilder::new("section")?
        .class(&format!("view {}", view.css_class()))
        .attr("data-view", view.title())?
        .children([title, body])?
        .build())
}
