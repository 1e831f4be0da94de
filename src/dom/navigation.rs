// ============================================================================
// NAVIGATION - Navegación dentro de la app vía History API
// ============================================================================
// pushState/replaceState + evento "popstate" sintético para que
// `use_route` se entere del cambio sin recargar la página.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent, Window};

/// Obtener window global
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// Path actual (`location.pathname`), "/" si no se puede leer
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname())
        .unwrap_or_else(|_| "/".to_string())
}

/// Navegar a `to` sin recargar.
/// Con `replace` se sustituye la entrada actual del historial.
pub fn navigate(to: &str, replace: bool) -> Result<(), JsValue> {
    let window = window()?;
    let history = window.history()?;

    if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(to))?;
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(to))?;
    }

    let event = Event::new("popstate")?;
    window.dispatch_event(&event)?;

    log::debug!("🧭 [NAV] {} -> {}", if replace { "replace" } else { "push" }, to);
    Ok(())
}

/// Click con modificadores o botón no principal: lo gestiona el navegador
/// (abrir en pestaña nueva, etc.)
pub fn is_modified_click(event: &MouseEvent) -> bool {
    event.button() != 0
        || event.ctrl_key()
        || event.meta_key()
        || event.shift_key()
        || event.alt_key()
}
