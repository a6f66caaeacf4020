// Progress Store boundary: trait plus the HTTP implementation.

pub mod http;

pub use http::LmsApiClient;

use crate::domain::models::{LessonId, ProgressReport, StoredProgress};

#[async_trait::async_trait]
pub trait ProgressStore: Send + Sync {
    /// Last recorded progress for this learner and lesson, `None` when the
    /// store has nothing for it.
    async fn fetch(&self, lesson_id: LessonId) -> anyhow::Result<Option<StoredProgress>>;

    /// Persist one progress report. Last write wins on the server side.
    async fn submit(&self, report: &ProgressReport) -> anyhow::Result<()>;
}
