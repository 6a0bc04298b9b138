pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Entrada do módulo wasm. O guard de borda roda antes de qualquer mount;
/// se ele emitir um redirect, a aplicação nem chega a montar.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Iniciando o Catálogo de Soluções (wasm)");

    if router::enforce_edge_guard() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("Configuração de runtime inicializada");
        router::mount_app();
    });
}
