// ============================================================================
// SESSION STORE - Única fuente de verdad de las sesiones reservadas
// ============================================================================
// Handle clonable: la raíz de la app crea UNO y lo pasa hacia abajo
// (provider o props). Todas las mutaciones pasan por book/cancel.
// ============================================================================

use crate::models::Session;
use crate::state::{apply, ReactiveState, SessionCommand, SessionState, SubscriptionId};

#[derive(Clone, Default)]
pub struct SessionStore {
    state: ReactiveState<SessionState>,
}

impl SessionStore {
    /// Store vacío
    pub fn new() -> Self {
        Self::default()
    }

    /// Store con estado inicial (útil para tests y previews).
    ///
    /// Cada sesión entra como una reserva: los IDs repetidos se descartan
    /// y se queda la primera.
    pub fn with_state(state: SessionState) -> Self {
        let seeded = state
            .upcoming_sessions
            .into_iter()
            .fold(SessionState::new(), |acc, session| {
                apply(&acc, &SessionCommand::Book(session))
            });
        Self {
            state: ReactiveState::new(seeded),
        }
    }

    /// Reservar sesión. Si el ID ya está reservado no hace nada.
    pub fn book_session(&self, session: Session) {
        let session_id = session.id.clone();
        if self.dispatch(SessionCommand::Book(session)) {
            log::info!("✅ [SESSIONS] Sesión {} reservada", session_id);
        } else {
            log::debug!("⏭️ [SESSIONS] Sesión {} ya reservada, se ignora", session_id);
        }
    }

    /// Cancelar sesión por ID. Si no existe no hace nada.
    pub fn cancel_session(&self, session_id: &str) {
        if self.dispatch(SessionCommand::Cancel(session_id.to_string())) {
            log::info!("🗑️ [SESSIONS] Sesión {} cancelada", session_id);
        } else {
            log::debug!("⏭️ [SESSIONS] Sesión {} no estaba reservada", session_id);
        }
    }

    /// Aplicar un comando. Devuelve `true` si el estado cambió
    /// (solo entonces se notifica a los subscribers).
    pub fn dispatch(&self, command: SessionCommand) -> bool {
        self.state.transition(|current| {
            let next = apply(current, &command);
            (next != *current).then_some(next)
        })
    }

    /// Sesiones reservadas, en orden de reserva
    pub fn upcoming_sessions(&self) -> Vec<Session> {
        self.state.with(|s| s.upcoming_sessions.clone())
    }

    /// Copia del estado actual
    pub fn snapshot(&self) -> SessionState {
        self.state.with(Clone::clone)
    }

    pub fn is_booked(&self, session_id: &str) -> bool {
        self.state.with(|s| s.contains(session_id))
    }

    pub fn len(&self) -> usize {
        self.state.with(SessionState::len)
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(SessionState::is_empty)
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("upcoming_sessions", &self.len())
            .finish()
    }
}
