//! Refresh token cookie helpers

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use mb_shared::config::CookieConfig;

/// Cookie carrying a freshly issued refresh token
pub fn refresh_cookie(config: &CookieConfig, token: &str, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(config.name.clone(), token.to_string())
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(same_site(&config.same_site))
        .path(config.path.clone())
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// Empty cookie with Max-Age=0 so the browser drops the refresh token
pub fn clear_refresh_cookie(config: &CookieConfig) -> Cookie<'static> {
    refresh_cookie(config, "", 0)
}

fn same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = refresh_cookie(&CookieConfig::default(), "abc", 604_800);
        let header = cookie.to_string();

        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert!(header.contains("Max-Age=604800"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_refresh_cookie(&CookieConfig::default());
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[test]
    fn test_same_site_parsing() {
        assert_eq!(same_site("Strict"), SameSite::Strict);
        assert_eq!(same_site("none"), SameSite::None);
        assert_eq!(same_site("whatever"), SameSite::Lax);
    }
}
