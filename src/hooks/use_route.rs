// ============================================================================
// USE ROUTE HOOK - Ruta actual, actualizada en cada "popstate"
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom::{current_path, window};
use crate::routes::Route;

#[hook]
pub fn use_route() -> Route {
    let route = use_state_eq(|| Route::from_path(&current_path()));

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = match window() {
                Ok(win) => {
                    let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                        route.set(Route::from_path(&current_path()));
                    }) as Box<dyn FnMut(web_sys::Event)>);

                    match win.add_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Some((win, closure)),
                        Err(e) => {
                            log::error!("❌ [ROUTE] Error registrando popstate: {:?}", e);
                            None
                        }
                    }
                }
                Err(e) => {
                    log::warn!("⚠️ [ROUTE] Sin window, rutas estáticas: {:?}", e);
                    None
                }
            };

            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    (*route).clone()
}
