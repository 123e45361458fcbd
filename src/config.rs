use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_NOTICE_TTL_SECS: u64 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Root of the REST API; `/posts` is appended to it.
    pub base_url: String,
    pub timeout: Duration,
    /// How long a transient message stays visible.
    pub notice_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            notice_ttl: Duration::from_secs(DEFAULT_NOTICE_TTL_SECS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(base) = std::env::var("BLOG_API_URL") {
            cfg.base_url = base;
        }
        if let Some(secs) = env_secs("BLOG_HTTP_TIMEOUT_SECS") {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_secs("BLOG_NOTICE_TTL_SECS") {
            cfg.notice_ttl = Duration::from_secs(secs);
        }
        cfg
    }

    /// `--base-url` wins over the environment.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base) = base_url {
            self.base_url = base;
        }
        self
    }
}

fn env_secs(key: &str) -> Option<u64> {
    std::env::var(key).ok().as_deref().and_then(parse_secs)
}

/// Whole seconds; zero is ignored like any other unusable value.
fn parse_secs(v: &str) -> Option<u64> {
    v.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}
