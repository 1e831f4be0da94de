// ============================================================================
// ERRORES - Tipos de error de la app
// ============================================================================

use thiserror::Error;

/// Errores de acceso al store de sesiones
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionsError {
    /// Se consumió el contexto fuera de un `SessionsProvider`
    #[error("{hook} must be used within a SessionsProvider")]
    OutsideProvider { hook: &'static str },
}

/// Errores cargando el catálogo de sesiones
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid session catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate session id '{0}' in catalog")]
    DuplicateId(String),
}
