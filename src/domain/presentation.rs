// Media presentation selection: pure mapping from a lesson's available
// assets to the sections a viewer renders.

use super::models::LessonMedia;
use crate::store::http::LessonResponse;

/// One renderable section of a lesson view. Only the video section is
/// wired to resume and progress tracking; audio and document sections are
/// presentational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSection {
    Video { url: String },
    Audio { url: String },
    Document { url: String },
}

/// What the lesson view renders: the present media sections, or a single
/// empty-state notice when the lesson has no assets at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonPresentation {
    Sections(Vec<MediaSection>),
    Empty,
}

impl LessonPresentation {
    /// URL of the section that carries resume/progress tracking, if any.
    pub fn tracked_video(&self) -> Option<&str> {
        match self {
            LessonPresentation::Sections(sections) => sections.iter().find_map(|s| match s {
                MediaSection::Video { url } => Some(url.as_str()),
                _ => None,
            }),
            LessonPresentation::Empty => None,
        }
    }
}

/// Join a server-relative media path onto the configured base URL.
pub fn resolve_media_url(media_base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        media_base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Decide which sections to render for a lesson. Pure function of the
/// media record; any subset of the three assets may be present.
pub fn select_presentation(media_base_url: &str, media: &LessonMedia) -> LessonPresentation {
    let mut sections = Vec::new();
    if let Some(path) = &media.video_url {
        sections.push(MediaSection::Video {
            url: resolve_media_url(media_base_url, path),
        });
    }
    if let Some(path) = &media.audio_url {
        sections.push(MediaSection::Audio {
            url: resolve_media_url(media_base_url, path),
        });
    }
    if let Some(path) = &media.pdf_url {
        sections.push(MediaSection::Document {
            url: resolve_media_url(media_base_url, path),
        });
    }
    if sections.is_empty() {
        LessonPresentation::Empty
    } else {
        LessonPresentation::Sections(sections)
    }
}

/// Map the lesson DTO returned by the API into the media record the
/// selector consumes.
pub fn map_lesson_media(resp: &LessonResponse) -> LessonMedia {
    LessonMedia {
        lesson_id: resp.id,
        video_url: resp.video_url.clone(),
        audio_url: resp.audio_url.clone(),
        pdf_url: resp.pdf_url.clone(),
    }
}
