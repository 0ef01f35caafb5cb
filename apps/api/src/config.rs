use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a workable default — the service boots with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Discord webhook for posting notifications. Unset disables them.
    pub discord_webhook_url: Option<String>,
    /// Size of the posting worker pool — one browser session per job.
    pub posting_workers: usize,
    /// Randomized pause bounds between two posts by the same worker, seconds.
    pub min_delay_between_posts: u64,
    pub max_delay_between_posts: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            discord_webhook_url: std::env::var("DISCORD_WEBHOOK_URL")
                .ok()
                .filter(|v| !v.is_empty()),
            posting_workers: parse_env("POSTING_WORKERS", 2)?,
            min_delay_between_posts: parse_env("MIN_DELAY_BETWEEN_POSTS", 30)?,
            max_delay_between_posts: parse_env("MAX_DELAY_BETWEEN_POSTS", 120)?,
        };

        if config.max_delay_between_posts < config.min_delay_between_posts {
            bail!("MAX_DELAY_BETWEEN_POSTS must be >= MIN_DELAY_BETWEEN_POSTS");
        }
        if config.posting_workers == 0 {
            bail!("POSTING_WORKERS must be at least 1");
        }

        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid value")),
        Err(_) => Ok(default),
    }
}
