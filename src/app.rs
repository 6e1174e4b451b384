// ============================================================================
// APP - Aplicación principal: root del DOM + ViewModel
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{append_child, clear_children, get_element_by_id, Listeners};
use crate::viewmodels::{project, BrowserSessionViewModel};
use crate::views::render_app;

pub const ROOT_ELEMENT_ID: &str = "app";

pub struct App {
    vm: Rc<BrowserSessionViewModel>,
    root: Element,
    /// Closures de la pantalla montada; se sueltan en el siguiente render
    listeners: Listeners,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        if let Some(doc) = crate::dom::document() {
            doc.set_title(&config.app_title);
        }

        let vm = Rc::new(BrowserSessionViewModel::browser(&config.listing_cache_key));
        log::info!("🗂️ [APP] Caché de empleos en clave '{}'", vm.cache().key());

        // Batchear notificaciones: un re-render por vuelta del event loop
        vm.subscribe(|| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self { vm, root, listeners: Listeners::new() })
    }

    pub fn view_model(&self) -> Rc<BrowserSessionViewModel> {
        self.vm.clone()
    }

    /// Re-render completo desde el estado actual
    pub fn render(&self) -> Result<(), JsValue> {
        let screen = project(&self.vm.state());
        clear_children(&self.root);
        let released = self.listeners.release();
        log::debug!("🧹 [APP] {} listeners liberados", released);
        let view = render_app(&screen, self.vm.clone(), &self.listeners)?;
        append_child(&self.root, &view)?;
        log::debug!("✅ [APP] Render completado");
        Ok(())
    }
}
