pub mod reporter;
pub mod resume;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::models::{LessonId, ProgressReport};
use crate::store::ProgressStore;
use reporter::ProgressThrottle;
use resume::ResumeGate;

/// Playback surface the session seeks on, implemented by whatever hosts
/// the actual media element.
pub trait MediaSurface: Send + Sync {
    fn seek_to(&self, position_seconds: u64);
}

/// Per-view coordination of resume and progress reporting for one lesson.
///
/// One session is created per lesson view and torn down on navigation.
/// Network work is spawned fire-and-forget; spawned tasks capture the
/// shared state by `Arc` and check the active flag after each await, so
/// results landing after teardown are discarded rather than applied.
pub struct LessonSession {
    lesson_id: LessonId,
    store: Arc<dyn ProgressStore>,
    surface: Arc<dyn MediaSurface>,
    shared: Arc<SessionShared>,
}

struct SessionShared {
    active: AtomicBool,
    resume: Mutex<ResumeGate>,
    throttle: Mutex<ProgressThrottle>,
}

impl LessonSession {
    /// Start a session for one lesson view. Spawns the resume-position
    /// fetch immediately; the seek is applied once the media also signals
    /// ready.
    pub fn begin(
        lesson_id: LessonId,
        store: Arc<dyn ProgressStore>,
        surface: Arc<dyn MediaSurface>,
    ) -> Self {
        let session = LessonSession {
            lesson_id,
            store,
            surface,
            shared: Arc::new(SessionShared {
                active: AtomicBool::new(true),
                resume: Mutex::new(ResumeGate::new()),
                throttle: Mutex::new(ProgressThrottle::new()),
            }),
        };

        let store = session.store.clone();
        let surface = session.surface.clone();
        let shared = session.shared.clone();
        tokio::spawn(async move {
            let position = resume::fetch_resume_position(store.as_ref(), lesson_id).await;
            // The view may be gone by the time the fetch lands
            if !shared.active.load(Ordering::SeqCst) {
                return;
            }
            let seek = shared.resume.lock().unwrap().position_loaded(position);
            if let Some(position) = seek {
                tracing::debug!(%lesson_id, position, "resuming playback");
                surface.seek_to(position);
            }
        });

        session
    }

    /// The media element loaded its metadata and accepts seeks. Safe to
    /// call more than once; at most one seek is ever applied.
    pub fn media_ready(&self) {
        if !self.shared.active.load(Ordering::SeqCst) {
            return;
        }
        let seek = self.shared.resume.lock().unwrap().media_ready();
        if let Some(position) = seek {
            tracing::debug!(lesson_id = %self.lesson_id, position, "resuming playback");
            self.surface.seek_to(position);
        }
    }

    /// One playback position sample from the media element. Emits at most
    /// one throttled report; submission failures are logged, not retried.
    pub fn time_update(&self, current_seconds: f64, duration_seconds: f64) {
        if !self.shared.active.load(Ordering::SeqCst) {
            return;
        }
        let sample = self
            .shared
            .throttle
            .lock()
            .unwrap()
            .observe(current_seconds, duration_seconds);
        let Some(sample) = sample else { return };

        let report = ProgressReport {
            lesson_id: self.lesson_id,
            completion_percentage: sample.percentage,
            last_position_seconds: sample.position_seconds,
            is_completed: sample.completed,
        };
        let store = self.store.clone();
        let shared = self.shared.clone();
        tokio::spawn(async move {
            if let Err(e) = store.submit(&report).await {
                // The throttle has already advanced; this percentage is
                // not re-reported
                if shared.active.load(Ordering::SeqCst) {
                    tracing::warn!(
                        error = %format!("{:?}", e),
                        lesson_id = %report.lesson_id,
                        completion_percentage = report.completion_percentage,
                        "progress report failed"
                    );
                }
            }
        });
    }

    /// Tear the view down. In-flight fetches and reports become no-ops.
    pub fn teardown(&self) {
        self.shared.active.store(false, Ordering::SeqCst);
    }
}

impl Drop for LessonSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
