use serde::Deserialize;

use super::ProgressStore;
use crate::domain::models::{LessonId, ProgressReport, StoredProgress};

#[derive(Clone, Debug)]
pub struct LmsApiClient {
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl LmsApiClient {
    /// Create a new client with the given API base URL (e.g. "http://localhost:8000").
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        let base_url_str = base_url.into();
        tracing::debug!(base_url = %base_url_str, "creating LmsApiClient");
        Ok(LmsApiClient {
            base_url: base_url_str.trim_end_matches('/').to_string(),
            api_token: None,
            client,
        })
    }

    /// Return a client with the provided API token set (Bearer)
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn auth_header(&self) -> Option<(String, String)> {
        self.api_token
            .as_ref()
            .map(|t| ("Authorization".to_string(), format!("Bearer {}", t)))
    }

    /// GET /courses/lessons/:id
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_lesson(&self, lesson_id: LessonId) -> anyhow::Result<LessonResponse> {
        let url = self.url(&format!("/courses/lessons/{}", lesson_id));
        tracing::debug!(%url, "GET lesson");
        let mut req = self.client.get(&url);
        if let Some((k, v)) = self.auth_header() {
            req = req.header(&k, &v);
        }
        let resp = req.send().await?;
        let status = resp.error_for_status()?;
        let body = status.text().await?;
        match serde_json::from_str::<LessonResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                let snippet_len = body.len().min(2000);
                let snippet = &body[..snippet_len];
                tracing::error!(error = %e, body_snippet = %snippet, "failed to parse LessonResponse");
                Err(e.into())
            }
        }
    }
}

#[async_trait::async_trait]
impl ProgressStore for LmsApiClient {
    /// GET /learning/progress/:lesson_id
    #[tracing::instrument(level = "debug", skip(self))]
    async fn fetch(&self, lesson_id: LessonId) -> anyhow::Result<Option<StoredProgress>> {
        let url = self.url(&format!("/learning/progress/{}", lesson_id));
        tracing::debug!(%url, "GET progress");
        let mut req = self.client.get(&url);
        if let Some((k, v)) = self.auth_header() {
            req = req.header(&k, &v);
        }
        let resp = req.send().await?;
        // An unknown lesson is an absence signal, not a failure
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status = resp.error_for_status()?;
        let body = status.text().await?;
        let parsed: StoredProgress = serde_json::from_str(&body)?;
        Ok(Some(parsed))
    }

    /// POST /learning/progress
    #[tracing::instrument(level = "debug", skip(self, report))]
    async fn submit(&self, report: &ProgressReport) -> anyhow::Result<()> {
        let url = self.url("/learning/progress");
        tracing::debug!(
            %url,
            lesson_id = %report.lesson_id,
            completion_percentage = report.completion_percentage,
            "POST progress"
        );
        let mut req = self.client.post(&url).json(report);
        if let Some((k, v)) = self.auth_header() {
            req = req.header(&k, &v);
        }
        let resp = req.send().await?;
        // Acknowledgement body ({"status": "saved"}) is not consumed
        resp.error_for_status()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LessonResponse {
    pub id: LessonId,
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub pdf_url: Option<String>,
    // allow extra fields
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}
