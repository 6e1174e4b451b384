// ============================================================================
// LOGIN VIEW - Formulario de login (Rust puro)
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{append_child, create_element, on_click, on_input_value, on_submit, set_attribute, set_class_name, ElementBuilder, Listeners};
use crate::viewmodels::{BrowserSessionViewModel, LoginScreen};

pub const USERNAME_PLACEHOLDER: &str = "Username";
pub const PASSWORD_PLACEHOLDER: &str = "Password";
pub const LOGIN_BUTTON_TEXT: &str = "Login";
pub const FEDERATED_BUTTON_TEXT: &str = "Login with Google";

/// Renderizar vista de login
pub fn render_login(screen: &LoginScreen, vm: Rc<BrowserSessionViewModel>, listeners: &Listeners) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    let container = ElementBuilder::new("div")?
        .class("container login-screen")
        .build();

    let title = ElementBuilder::new("h1")?
        .class("title")
        .text(&screen.title)
        .build();
    append_child(&container, &title)?;

    if let Some(error) = &screen.error {
        let error_el = ElementBuilder::new("p")?
            .class("error")
            .attr("role", "alert")?
            .text(error)
            .build();
        append_child(&container, &error_el)?;
    }

    let form = create_element("form")?;
    set_class_name(&form, "login-form");

    let username_input = create_input("username", "text", USERNAME_PLACEHOLDER, &screen.username)?;
    {
        let vm = vm.clone();
        on_input_value(&username_input, listeners, move |value| vm.set_username(value))?;
    }

    // Entrada enmascarada
    let password_input = create_input("password", "password", PASSWORD_PLACEHOLDER, &screen.password)?;
    {
        let vm = vm.clone();
        on_input_value(&password_input, listeners, move |value| vm.set_password(value))?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-login")
        .text(LOGIN_BUTTON_TEXT)
        .build();

    {
        let vm = vm.clone();
        on_submit(&form, listeners, move || {
            // Los valores vienen del estado: los inputs los mantienen al día
            let form_state = vm.state().form;
            let vm = vm.clone();
            spawn_local(async move {
                // El rechazo ya queda en el estado (texto de error) y en el log del ViewModel
                let _ = vm.submit_credentials(form_state.username, form_state.password).await;
            });
        })?;
    }

    append_child(&form, &username_input)?;
    append_child(&form, &password_input)?;
    append_child(&form, &submit_btn)?;
    append_child(&container, &form)?;

    let federated_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn btn-google")
        .text(FEDERATED_BUTTON_TEXT)
        .build();

    {
        let vm = vm.clone();
        on_click(&federated_btn, listeners, move || {
            let vm = vm.clone();
            spawn_local(async move {
                let _ = vm.federated_login().await;
            });
        })?;
    }

    let federated_wrapper = ElementBuilder::new("div")?
        .class("google-button")
        .child(&federated_btn)?
        .build();
    append_child(&container, &federated_wrapper)?;

    Ok(container)
}

/// Atributos de un input del formulario. El valor nunca va como atributo:
/// se asigna como propiedad para que la contraseña no quede en el markup.
pub fn input_attributes(id: &str, input_type: &str, placeholder: &str) -> Vec<(&'static str, String)> {
    let autocomplete = if input_type == "password" { "current-password" } else { "username" };
    vec![
        ("type", input_type.to_string()),
        ("id", id.to_string()),
        ("name", id.to_string()),
        ("placeholder", placeholder.to_string()),
        ("autocomplete", autocomplete.to_string()),
    ]
}

/// Helper para crear un input del formulario
fn create_input(id: &str, input_type: &str, placeholder: &str, value: &str) -> Result<Element, JsValue> {
    let input = create_element("input")?.dyn_into::<HtmlInputElement>()?;
    for (name, attr_value) in input_attributes(id, input_type, placeholder) {
        set_attribute(&input, name, &attr_value)?;
    }
    input.set_value(value);
    set_class_name(&input, "input");
    Ok(input.into())
}
