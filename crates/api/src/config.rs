use estatenexus_insights::gemini::DEFAULT_MODEL;

/// Server configuration loaded from environment variables.
///
/// All fields have development-friendly defaults except the credentials:
/// a missing `DATABASE_URL` puts the API into a degraded mode where every
/// data-access endpoint reports configuration-missing, and a missing
/// `GEMINI_API_KEY` makes the narrative endpoints serve their fallback
/// text. Neither is a startup failure.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres connection string; `None` disables the data-access layer.
    pub database_url: Option<String>,
    /// Gemini API key; `None` disables narrative generation.
    pub gemini_api_key: Option<String>,
    /// Gemini model identifier.
    pub gemini_model: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | unset (degraded mode)      |
    /// | `GEMINI_API_KEY`       | unset (fallback summaries) |
    /// | `GEMINI_MODEL`         | `gemini-3-flash-preview`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty());
        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            gemini_api_key,
            gemini_model,
        }
    }
}
