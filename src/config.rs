use std::path::Path;

#[derive(Debug)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: String,
    pub media_base_url: String,
}

const DEFAULT_MEDIA_BASE_URL: &str = "http://localhost:8000/media/";

impl Config {
    /// Load configuration from the environment, reading `.env.local` or
    /// `.env` first when present.
    pub fn load() -> anyhow::Result<Self> {
        if Path::new(".env.local").exists() {
            dotenvy::from_filename(".env.local")?;
        } else if Path::new(".env").exists() {
            dotenvy::from_filename(".env")?;
        }
        let api_base_url = std::env::var("LMS_API_BASE_URL").unwrap_or_default();
        let api_token = std::env::var("LMS_API_TOKEN").unwrap_or_default();
        let media_base_url =
            std::env::var("LMS_MEDIA_BASE_URL").unwrap_or(DEFAULT_MEDIA_BASE_URL.into());
        Ok(Config {
            api_base_url,
            api_token,
            media_base_url,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("LMS_API_BASE_URL is missing".into());
        }
        Ok(())
    }
}
