// Resume-from-last-position: fail-open fetch plus a latch that applies
// the seek exactly once per lesson view.

use crate::domain::models::LessonId;
use crate::store::ProgressStore;

/// Last stored position for this lesson. Fail-open: any store failure is
/// treated as "no prior progress" so playback is never blocked.
#[tracing::instrument(level = "debug", skip(store))]
pub async fn fetch_resume_position(store: &dyn ProgressStore, lesson_id: LessonId) -> u64 {
    match store.fetch(lesson_id).await {
        Ok(Some(progress)) => progress.last_position_seconds,
        Ok(None) => 0,
        Err(e) => {
            tracing::debug!(%lesson_id, error = %format!("{:?}", e), "no previous progress found");
            0
        }
    }
}

/// Two-event latch: the seek target is released once both the stored
/// position and the media-ready signal have arrived, and never again.
/// A stored position of zero releases nothing.
#[derive(Debug, Default)]
pub struct ResumeGate {
    position: Option<u64>,
    media_ready: bool,
    seek_done: bool,
}

impl ResumeGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resume fetch resolved.
    pub fn position_loaded(&mut self, position_seconds: u64) -> Option<u64> {
        self.position = Some(position_seconds);
        self.try_release()
    }

    /// The media element signalled it accepts seeks. Duplicate signals are
    /// no-ops once the seek has been released.
    pub fn media_ready(&mut self) -> Option<u64> {
        self.media_ready = true;
        self.try_release()
    }

    fn try_release(&mut self) -> Option<u64> {
        if self.seek_done || !self.media_ready {
            return None;
        }
        let position = self.position?;
        self.seek_done = true;
        (position > 0).then_some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ProgressReport, StoredProgress};

    #[test]
    fn fetch_then_ready_releases_once() {
        let mut gate = ResumeGate::new();
        assert_eq!(gate.position_loaded(120), None);
        assert_eq!(gate.media_ready(), Some(120));
        assert_eq!(gate.media_ready(), None);
    }

    #[test]
    fn ready_then_fetch_releases_once() {
        let mut gate = ResumeGate::new();
        assert_eq!(gate.media_ready(), None);
        assert_eq!(gate.position_loaded(45), Some(45));
        assert_eq!(gate.media_ready(), None);
        assert_eq!(gate.position_loaded(45), None);
    }

    #[test]
    fn zero_position_never_seeks() {
        let mut gate = ResumeGate::new();
        assert_eq!(gate.position_loaded(0), None);
        assert_eq!(gate.media_ready(), None);
        assert_eq!(gate.media_ready(), None);
    }

    struct FailingStore;

    #[async_trait::async_trait]
    impl ProgressStore for FailingStore {
        async fn fetch(&self, _lesson_id: LessonId) -> anyhow::Result<Option<StoredProgress>> {
            anyhow::bail!("store unreachable")
        }

        async fn submit(&self, _report: &ProgressReport) -> anyhow::Result<()> {
            anyhow::bail!("store unreachable")
        }
    }

    struct EmptyStore;

    #[async_trait::async_trait]
    impl ProgressStore for EmptyStore {
        async fn fetch(&self, _lesson_id: LessonId) -> anyhow::Result<Option<StoredProgress>> {
            Ok(None)
        }

        async fn submit(&self, _report: &ProgressReport) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn fetch_resume_position_is_fail_open() {
        assert_eq!(fetch_resume_position(&FailingStore, LessonId(3)).await, 0);
    }

    #[tokio::test]
    async fn fetch_resume_position_defaults_absent_to_zero() {
        assert_eq!(fetch_resume_position(&EmptyStore, LessonId(3)).await, 0);
    }
}
