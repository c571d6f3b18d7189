//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "spark";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default REST API root, resource paths are appended to it.
pub const DEFAULT_API_BASE_URL: &str = "https://api.ciscospark.com/v1";

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Environment variable consulted when no access token is configured.
pub const ACCESS_TOKEN_ENV: &str = "CISCOSPARK_ACCESS_TOKEN";

/// Response header carrying the server-side request tracking id.
pub const TRACKING_ID_HEADER: &str = "trackingid";

/// Default `User-Agent` header value.
pub fn default_user_agent() -> String {
    format!("{APP_NAME}-rs/{APP_VERSION}")
}

/// Resource paths relative to the API base URL.
pub mod paths {
    pub const ROOMS: &str = "rooms";
    pub const MESSAGES: &str = "messages";
    pub const MEMBERSHIPS: &str = "memberships";
    pub const TEAM_MEMBERSHIPS: &str = "team/memberships";
    pub const TEAMS: &str = "teams";
    pub const WEBHOOKS: &str = "webhooks";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent() {
        let ua = default_user_agent();
        assert!(ua.starts_with("spark-rs/"));
        assert!(ua.ends_with(APP_VERSION));
    }

    #[test]
    fn test_team_memberships_path_is_nested() {
        assert_eq!(paths::TEAM_MEMBERSHIPS, "team/memberships");
    }
}
