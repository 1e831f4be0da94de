// ============================================================================
// ROUTES - Rutas de la app
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` o `/sessions`
    Sessions,
    /// `/sessions/{id}`
    SessionDetail(String),
    /// `/upcoming`
    UpcomingSessions,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["sessions"] => Route::Sessions,
            ["sessions", id] => Route::SessionDetail((*id).to_string()),
            ["upcoming"] => Route::UpcomingSessions,
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Sessions => "/sessions".to_string(),
            Route::SessionDetail(id) => format!("/sessions/{}", id),
            Route::UpcomingSessions => "/upcoming".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Sessions);
        assert_eq!(Route::from_path(""), Route::Sessions);
        assert_eq!(Route::from_path("/sessions/"), Route::Sessions);
        assert_eq!(Route::from_path("/sessions/s1"), Route::SessionDetail("s1".into()));
        assert_eq!(Route::from_path("/upcoming"), Route::UpcomingSessions);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/sessions/s1/edit"), Route::NotFound);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }

    #[test]
    fn to_path_parses_back() {
        for route in [
            Route::Sessions,
            Route::SessionDetail("s3".into()),
            Route::UpcomingSessions,
        ] {
            assert_eq!(Route::from_path(&route.to_path()), route);
        }
    }
}
