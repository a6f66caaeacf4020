pub mod config;
pub mod domain;
pub mod logging;
pub mod player;
pub mod store;

pub use config::Config;
pub use domain::models::{LessonId, LessonMedia, ProgressReport, StoredProgress};
pub use domain::presentation::{LessonPresentation, MediaSection, select_presentation};
pub use player::{LessonSession, MediaSurface};
pub use store::{LmsApiClient, ProgressStore};
