// ============================================================================
// EVENT HANDLING - Listeners sobre elementos del DOM
// ============================================================================
// Las closures de los listeners viven en un `Listeners` que pertenece a la App.
// Cada re-render vacía el root y suelta las closures de la pantalla anterior.
// ============================================================================

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

/// Closure de listener tal como la registra el navegador
pub type ListenerClosure = Closure<dyn FnMut(Event)>;

/// Listeners de la pantalla montada
pub type Listeners = ListenerRegistry<ListenerClosure>;

/// Contenedor de los handles de listeners vivos. Soltar un handle libera
/// la closure asociada.
pub struct ListenerRegistry<H> {
    handles: RefCell<Vec<H>>,
}

impl<H> ListenerRegistry<H> {
    pub fn new() -> Self {
        Self {
            handles: RefCell::new(Vec::new()),
        }
    }

    pub fn hold(&self, handle: H) {
        self.handles.borrow_mut().push(handle);
    }

    /// Soltar todos los handles; devuelve cuántos había
    pub fn release(&self) -> usize {
        // Se sacan antes de soltarlos: el Drop de un handle no puede tocar el registro prestado
        let handles = std::mem::take(&mut *self.handles.borrow_mut());
        handles.len()
    }

    pub fn len(&self) -> usize {
        self.handles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.borrow().is_empty()
    }
}

impl<H> Default for ListenerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

fn listen<F>(element: &Element, event: &str, listeners: &Listeners, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure: ListenerClosure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    listeners.hold(closure);
    Ok(())
}

/// Click handler
pub fn on_click<F>(element: &Element, listeners: &Listeners, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(element, "click", listeners, move |_e| handler())
}

/// Input handler: recibe el valor actual del `<input>`
pub fn on_input_value<F>(element: &Element, listeners: &Listeners, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "input", listeners, move |e| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(target.value());
        }
    })
}

/// Submit handler para `<form>`; evita el reload de la página
pub fn on_submit<F>(form: &Element, listeners: &Listeners, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", listeners, move |e| {
        e.prevent_default();
        handler();
    })
}
