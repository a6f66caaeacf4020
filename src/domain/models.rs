// Domain models for lesson media and playback progress

use serde::{Deserialize, Serialize};

/// Server-assigned lesson identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(pub u64);

impl std::fmt::Display for LessonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Playable/viewable assets of one lesson. Paths are server-relative and
/// resolved against the configured media base URL at presentation time.
/// Owned by the view displaying the lesson; discarded on navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonMedia {
    pub lesson_id: LessonId,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub pdf_url: Option<String>,
}

/// Body of `GET /learning/progress/{lesson_id}`. The store answers with
/// zero values rather than an error when no row exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StoredProgress {
    pub last_position_seconds: u64,
    #[serde(default)]
    pub completion_percentage: u8,
    #[serde(default)]
    pub is_completed: bool,
}

/// Body of `POST /learning/progress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub lesson_id: LessonId,
    pub completion_percentage: u8,
    pub last_position_seconds: u64,
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_progress_deserialize() {
        let json = r#"{ "last_position_seconds": 120, "completion_percentage": 40, "is_completed": false }"#;
        let p: StoredProgress = serde_json::from_str(json).unwrap();
        assert_eq!(p.last_position_seconds, 120);
        assert_eq!(p.completion_percentage, 40);
        assert!(!p.is_completed);
    }

    #[test]
    fn stored_progress_zero_row_deserialize() {
        // Shape the store returns for a lesson never watched
        let json = r#"{ "last_position_seconds": 0, "completion_percentage": 0, "is_completed": false }"#;
        let p: StoredProgress = serde_json::from_str(json).unwrap();
        assert_eq!(p.last_position_seconds, 0);
        assert!(!p.is_completed);
    }

    #[test]
    fn progress_report_serialize() {
        let report = ProgressReport {
            lesson_id: LessonId(7),
            completion_percentage: 12,
            last_position_seconds: 37,
            is_completed: false,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "lesson_id": 7,
                "completion_percentage": 12,
                "last_position_seconds": 37,
                "is_completed": false
            })
        );
    }
}
