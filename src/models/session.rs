use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION - Sesión reservable
// ============================================================================

/// Sesión que un cliente puede reservar desde la web.
///
/// `date` e `image` se guardan tal cual llegan (sin parseo ni validación),
/// y `duration` es opaco para el store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// ID único (lo aporta quien reserva, el store garantiza la unicidad)
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub date: String,
    pub image: String,
    pub duration: f64,
}

impl Session {
    /// Crear sesión con ID y título, el resto vacío
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            description: String::new(),
            date: String::new(),
            image: String::new(),
            duration: 0.0,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_empty_display_fields() {
        let session = Session::new("s1", "Yoga");
        assert_eq!(session.id, "s1");
        assert_eq!(session.title, "Yoga");
        assert!(session.summary.is_empty());
        assert_eq!(session.duration, 0.0);
    }

    #[test]
    fn deserializes_from_catalog_json() {
        let json = r#"{
            "id": "s9",
            "title": "Mentoring",
            "summary": "short",
            "description": "long",
            "date": "2025-03-01",
            "image": "/img.png",
            "duration": 2
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(
            session,
            Session::new("s9", "Mentoring")
                .with_summary("short")
                .with_description("long")
                .with_date("2025-03-01")
                .with_image("/img.png")
                .with_duration(2.0)
        );
    }
}
