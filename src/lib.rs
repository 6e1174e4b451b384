// ============================================================================
// JOB LISTINGS APP - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que pintan DOM (sin lógica)
// - ViewModels: proyección del estado + operaciones de sesión
// - State: AppState inmutable + reducer
// - Services: caché en localStorage + proveedor de identidad
// - Models: empleos, perfil de usuario y datos de prueba
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::AppConfig;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 {} - Rust Puro + MVVM", config.app_title);

    let app = App::new(&config)?;
    app.render()?;
    let vm = app.view_model();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // La caché se lee una sola vez al arrancar, con o sin sesión
    wasm_bindgen_futures::spawn_local(async move {
        vm.restore_listings().await;
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
