// ============================================================================
// SESSION CONTEXT - Compartir el store de sesiones entre componentes
// ============================================================================
// El provider recibe (o crea) el SessionStore, se suscribe a sus cambios y
// publica un snapshot inmutable. Los consumidores fuera del provider fallan
// en el acto: es un error de cableado, no una condición recuperable.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::error::SessionsError;
use crate::models::Session;
use crate::stores::SessionStore;

/// Valor del contexto: handle del store + snapshot de las sesiones
#[derive(Clone, PartialEq)]
pub struct SessionsContext {
    pub store: SessionStore,
    pub upcoming_sessions: Rc<Vec<Session>>,
}

impl SessionsContext {
    pub fn book_session(&self, session: Session) {
        self.store.book_session(session);
    }

    pub fn cancel_session(&self, session_id: &str) {
        self.store.cancel_session(session_id);
    }

    pub fn upcoming_sessions(&self) -> &[Session] {
        &self.upcoming_sessions
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionsProviderProps {
    /// Store de la raíz de la app. Si no se pasa, el provider crea uno.
    #[prop_or_default]
    pub store: Option<SessionStore>,
    #[prop_or_default]
    pub children: Html,
}

/// Provider component que envuelve la app y proporciona el estado de sesiones
#[function_component(SessionsProvider)]
pub fn sessions_provider(props: &SessionsProviderProps) -> Html {
    let store = use_memo(props.store.clone(), |injected| {
        injected.clone().unwrap_or_default()
    });
    let upcoming = use_state_eq(|| Rc::new(store.upcoming_sessions()));

    {
        let upcoming = upcoming.clone();
        use_effect_with((*store).clone(), move |store| {
            // El store puede haber cambiado entre el render y el effect
            upcoming.set(Rc::new(store.upcoming_sessions()));

            let subscription = {
                let reader = store.clone();
                store.subscribe(move || upcoming.set(Rc::new(reader.upcoming_sessions())))
            };
            log::debug!("🔗 [SESSIONS] Provider suscrito al store");

            let store = store.clone();
            move || {
                store.unsubscribe(subscription);
                log::debug!("🔌 [SESSIONS] Provider desuscrito del store");
            }
        });
    }

    let context = SessionsContext {
        store: (*store).clone(),
        upcoming_sessions: (*upcoming).clone(),
    };

    html! {
        <ContextProvider<SessionsContext> {context}>
            {props.children.clone()}
        </ContextProvider<SessionsContext>>
    }
}

/// Acceso al contexto sin pánico
#[hook]
pub fn use_sessions_context_checked() -> Result<SessionsContext, SessionsError> {
    use_context::<SessionsContext>().ok_or(SessionsError::OutsideProvider {
        hook: "use_sessions_context",
    })
}

/// Acceso al contexto. Entra en pánico fuera de un `SessionsProvider`.
#[hook]
pub fn use_sessions_context() -> SessionsContext {
    match use_sessions_context_checked() {
        Ok(context) => context,
        Err(err) => panic!("{}", err),
    }
}
