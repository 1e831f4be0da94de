// ============================================================================
// CATALOG SERVICE - Catálogo de sesiones reservables
// ============================================================================
// Embebido en el binario (no hay backend). Se valida que los IDs sean únicos.
// ============================================================================

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::Session;

const CATALOG_JSON: &str = include_str!("../../assets/sessions.json");

/// Cargar el catálogo embebido
pub fn load_catalog() -> Result<Vec<Session>, CatalogError> {
    let sessions = parse_catalog(CATALOG_JSON)?;
    log::info!("📚 [CATALOG] {} sesiones disponibles", sessions.len());
    Ok(sessions)
}

/// Parsear un catálogo JSON (array de sesiones)
pub fn parse_catalog(json: &str) -> Result<Vec<Session>, CatalogError> {
    let sessions: Vec<Session> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for session in &sessions {
        if !seen.insert(session.id.as_str()) {
            return Err(CatalogError::DuplicateId(session.id.clone()));
        }
    }

    Ok(sessions)
}

pub fn find_session<'a>(catalog: &'a [Session], session_id: &str) -> Option<&'a Session> {
    catalog.iter().find(|s| s.id == session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = load_catalog().unwrap();
        assert!(!catalog.is_empty());
        assert!(find_session(&catalog, &catalog[0].id).is_some());
    }

    #[test]
    fn fractional_durations_are_accepted() {
        let json = r#"[
            {"id":"a","title":"A","summary":"","description":"","date":"","image":"","duration":1.5},
            {"id":"b","title":"B","summary":"","description":"","date":"","image":"","duration":2}
        ]"#;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(find_session(&catalog, "a").map(|s| s.duration), Some(1.5));
        assert_eq!(find_session(&catalog, "b").map(|s| s.duration), Some(2.0));
    }

    #[test]
    fn embedded_catalog_keeps_half_hour_session() {
        let catalog = load_catalog().unwrap();
        assert_eq!(find_session(&catalog, "s2").map(|s| s.duration), Some(1.5));
    }

    #[test]
    fn find_missing_session() {
        let catalog = vec![Session::new("s1", "Yoga")];
        assert!(find_session(&catalog, "nope").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id":"a","title":"A","summary":"","description":"","date":"","image":"","duration":1},
            {"id":"a","title":"B","summary":"","description":"","date":"","image":"","duration":1}
        ]"#;
        match parse_catalog(json) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_catalog("{"), Err(CatalogError::Parse(_))));
    }
}
