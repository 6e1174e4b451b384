// ============================================================================
// VIEWS - Funciones que pintan DOM a partir de la proyección (sin lógica)
// ============================================================================

pub mod login;
pub mod listings;

pub use login::render_login;
pub use listings::render_listings;

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::Listeners;
use crate::viewmodels::{BrowserSessionViewModel, Screen};

/// Renderizar la pantalla que corresponde al estado
pub fn render_app(screen: &Screen, vm: Rc<BrowserSessionViewModel>, listeners: &Listeners) -> Result<Element, JsValue> {
    match screen {
        Screen::Login(login) => render_login(login, vm, listeners),
        Screen::Listings(listings) => render_listings(listings, vm, listeners),
    }
}
