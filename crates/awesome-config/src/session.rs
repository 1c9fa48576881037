use std::env;
use std::fmt;

pub const DEFAULT_SECRET: &str = "Awesome";
pub const DEFAULT_TTL_SECONDS: i64 = 86400;
pub const DEFAULT_COOKIE_NAME: &str = "awesession";
/// Upper bound for `SESSION_TTL`: ten years.
pub const MAX_TTL_SECONDS: i64 = 10 * 365 * 86400;

#[derive(Clone)]
pub struct SessionConfig {
    /// Server secret appended to the signing material of every session token.
    pub secret: String,
    /// Token lifetime and cookie `max-age`, in seconds.
    pub ttl_seconds: i64,
    pub cookie_name: String,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("SESSION_SECRET")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SECRET.to_string()),
            ttl_seconds: ttl_seconds(lookup("SESSION_TTL")),
            cookie_name: lookup("SESSION_COOKIE_NAME")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
        }
    }
}

fn ttl_seconds(raw: Option<String>) -> i64 {
    let ttl = crate::parse_or("SESSION_TTL", raw, DEFAULT_TTL_SECONDS);
    if (1..=MAX_TTL_SECONDS).contains(&ttl) {
        return ttl;
    }

    tracing::warn!(
        key = "SESSION_TTL",
        value = ttl,
        default = DEFAULT_TTL_SECONDS,
        "Session TTL out of range, using default"
    );
    DEFAULT_TTL_SECONDS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("cookie_name", &self.cookie_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.secret, "Awesome");
        assert_eq!(config.ttl_seconds, 86400);
        assert_eq!(config.cookie_name, "awesession");
    }

    #[test]
    fn test_overrides() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            ("SESSION_SECRET", "s3cret"),
            ("SESSION_TTL", "600"),
            ("SESSION_COOKIE_NAME", "sid"),
        ]));
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.ttl_seconds, 600);
        assert_eq!(config.cookie_name, "sid");
    }

    #[test]
    fn test_bad_ttl_falls_back() {
        let config = SessionConfig::from_lookup(lookup_from(&[("SESSION_TTL", "a day")]));
        assert_eq!(config.ttl_seconds, DEFAULT_TTL_SECONDS);
    }

    #[test]
    fn test_out_of_range_ttl_falls_back() {
        let above_max = (MAX_TTL_SECONDS + 1).to_string();
        for raw in ["0", "-60", "9223372036854775807", above_max.as_str()] {
            let config = SessionConfig::from_lookup(lookup_from(&[("SESSION_TTL", raw)]));
            assert_eq!(config.ttl_seconds, DEFAULT_TTL_SECONDS, "SESSION_TTL={raw}");
        }

        let max = MAX_TTL_SECONDS.to_string();
        let config = SessionConfig::from_lookup(lookup_from(&[("SESSION_TTL", max.as_str())]));
        assert_eq!(config.ttl_seconds, MAX_TTL_SECONDS);
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = SessionConfig::from_lookup(lookup_from(&[("SESSION_SECRET", "hunter2")]));
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
