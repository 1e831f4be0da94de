// ============================================================================
// APP - Componente raíz
// ============================================================================
// Dueño del SessionStore (una sola instancia para toda la app) y del
// catálogo. Todo lo demás cuelga del SessionsProvider.
// ============================================================================

use yew::prelude::*;

use crate::components::{Button, NavigationButton};
use crate::config::CONFIG;
use crate::hooks::{use_route, SessionsProvider};
use crate::routes::Route;
use crate::services::{find_session, load_catalog};
use crate::stores::SessionStore;
use crate::views::sessions::{SessionDetail, SessionsList, UpcomingSessions};
use crate::views::shared::Header;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| SessionStore::new());
    let catalog = use_memo((), |_| match load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("❌ [APP] Error cargando catálogo: {}", e);
            Vec::new()
        }
    });
    let route = use_route();

    let page = match &route {
        Route::Sessions => html! { <SessionsList catalog={catalog.clone()} /> },
        Route::SessionDetail(id) => match find_session(&catalog, id) {
            Some(session) => html! { <SessionDetail session={session.clone()} /> },
            None => {
                log::warn!("⚠️ [APP] Sesión {} no encontrada", id);
                html! { <NotFound /> }
            }
        },
        Route::UpcomingSessions => html! { <UpcomingSessions /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <SessionsProvider store={(*store).clone()}>
            <Header title={CONFIG.app_title.clone()} />
            <main class="app-content">{page}</main>
        </SessionsProvider>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h2>{"Page not found"}</h2>
            <Button variant={NavigationButton::to(Route::Sessions.to_path()).replace()} text_only=true>
                {"Back to sessions"}
            </Button>
        </section>
    }
}
