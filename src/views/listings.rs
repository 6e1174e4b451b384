// ============================================================================
// LISTINGS VIEW - Header de usuario + listado de empleos
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder, Listeners};
use crate::viewmodels::{BrowserSessionViewModel, JobCard, ListingsBody, ListingsScreen};

pub const LOGOUT_BUTTON_TEXT: &str = "Logout";

/// Renderizar pantalla de listado
pub fn render_listings(screen: &ListingsScreen, vm: Rc<BrowserSessionViewModel>, listeners: &Listeners) -> Result<Element, JsValue> {
    log::debug!("🎬 [LISTINGS] render_listings()");

    let container = ElementBuilder::new("div")?
        .class("container listings-screen")
        .build();

    append_child(&container, &render_user_header(screen)?)?;

    let title = ElementBuilder::new("h1")?
        .class("title")
        .text(&screen.title)
        .build();
    append_child(&container, &title)?;

    let list = ElementBuilder::new("div")?
        .class("job-list")
        .attr("role", "list")?
        .build();

    match &screen.body {
        ListingsBody::Empty(message) => {
            let empty = ElementBuilder::new("p")?
                .class("empty-text")
                .text(message)
                .build();
            append_child(&list, &empty)?;
        }
        ListingsBody::Cards(cards) => {
            for card in cards {
                append_child(&list, &render_job_card(card)?)?;
            }
        }
    }
    append_child(&container, &list)?;

    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn btn-logout")
        .text(LOGOUT_BUTTON_TEXT)
        .build();

    on_click(&logout_btn, listeners, move || {
        let vm = vm.clone();
        spawn_local(async move {
            vm.logout().await;
            log::info!("✅ [SESSION] Logout completado");
        });
    })?;
    append_child(&container, &logout_btn)?;

    Ok(container)
}

fn render_user_header(screen: &ListingsScreen) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("user-header")
        .build();

    if let Some(avatar_url) = &screen.avatar_url {
        let avatar = ElementBuilder::new("img")?
            .class("profile-picture")
            .attr("src", avatar_url)?
            .attr("alt", "")?
            .build();
        append_child(&header, &avatar)?;
    }

    let name = ElementBuilder::new("span")?
        .class("user-name")
        .text(&screen.greeting)
        .build();
    append_child(&header, &name)?;

    Ok(header)
}

/// Card de un empleo
fn render_job_card(card: &JobCard) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("div")?
        .class("job-title")
        .text(&card.title)
        .build();
    let company = ElementBuilder::new("div")?
        .class("job-company")
        .text(&card.company)
        .build();
    let description = ElementBuilder::new("div")?
        .class("job-description")
        .text(&card.description)
        .build();

    Ok(ElementBuilder::new("div")?
        .class("job-card")
        .attr("role", "listitem")?
        .attr("data-job-id", &card.key)?
        .child(&title)?
        .child(&company)?
        .child(&description)?
        .build())
}
