// ============================================================================
// MOUNT HOST - Dónde buscar el elemento ancla
// ============================================================================

use web_sys::Element;

use crate::dom::{document, get_element_by_id};
use crate::error::MountError;

/// Documento donde se busca el ancla de montaje
pub trait MountHost {
    /// `Ok(None)` si el documento existe pero el ancla no
    fn find_anchor(&self, id: &str) -> Result<Option<Element>, MountError>;
}

/// El `document` de la página actual
pub struct BrowserDocument;

impl MountHost for BrowserDocument {
    fn find_anchor(&self, id: &str) -> Result<Option<Element>, MountError> {
        if document().is_none() {
            return Err(MountError::NoDocument);
        }
        Ok(get_element_by_id(id))
    }
}
