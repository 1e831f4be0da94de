// ============================================================================
// SESSION STATE - Máquina de estados de reservas (pura, sin UI)
// ============================================================================

use crate::models::Session;

/// Sesiones reservadas, en orden de reserva.
///
/// Invariante: nunca hay dos entradas con el mismo `id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub upcoming_sessions: Vec<Session>,
}

/// Comandos que modifican el estado de reservas
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Reservar (se ignora si el ID ya está reservado)
    Book(Session),
    /// Cancelar por ID (se ignora si no existe)
    Cancel(String),
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ¿Hay una sesión reservada con este ID?
    pub fn contains(&self, session_id: &str) -> bool {
        self.upcoming_sessions.iter().any(|s| s.id == session_id)
    }

    pub fn find(&self, session_id: &str) -> Option<&Session> {
        self.upcoming_sessions.iter().find(|s| s.id == session_id)
    }

    pub fn len(&self) -> usize {
        self.upcoming_sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming_sessions.is_empty()
    }
}

/// Función de transición: estado actual + comando -> siguiente estado.
pub fn apply(state: &SessionState, command: &SessionCommand) -> SessionState {
    match command {
        SessionCommand::Book(session) => {
            if state.contains(&session.id) {
                return state.clone();
            }
            let mut upcoming_sessions = state.upcoming_sessions.clone();
            upcoming_sessions.push(session.clone());
            SessionState { upcoming_sessions }
        }
        SessionCommand::Cancel(session_id) => SessionState {
            upcoming_sessions: state
                .upcoming_sessions
                .iter()
                .filter(|s| s.id != *session_id)
                .cloned()
                .collect(),
        },
    }
}
