// ============================================================================
// SESSION BOOKING APP - FRONTEND (RUST + YEW)
// ============================================================================
// - Components: Button / Input reutilizables (solo render)
// - State: máquina de estados pura de reservas
// - Stores: SessionStore (handle compartido, dueño: la raíz de la app)
// - Hooks: SessionsProvider + acceso al contexto, ruta actual
// - Views: pantallas de la app
// ============================================================================

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod stores;
pub mod views;

use crate::config::CONFIG;
use crate::views::App;

/// Arrancar la app en el navegador
pub fn run() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🚀 {} starting... (entorno: {})",
        CONFIG.app_title,
        CONFIG.environment
    );

    yew::Renderer::<App>::new().render();
}
