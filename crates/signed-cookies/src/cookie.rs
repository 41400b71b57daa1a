use std::fmt;

use chrono::{DateTime, Utc};
use http::HeaderValue;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{CookieError, CookieOptions};

/// An outgoing HTTP cookie.
///
/// Cookies are value objects produced by [`CookieFactory`](crate::CookieFactory),
/// [`CookieCreator`](crate::CookieCreator) and [`CookieJar`](crate::CookieJar). They carry the
/// attributes of the [`CookieOptions`] they were created with and cannot be changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: String,
    expires: Option<DateTime<Utc>>,
    path: String,
    domain: Option<String>,
    secure: bool,
    http_only: bool,
    same_site: Option<SameSite>,
}

/// SameSite cookie attribute for cross-site request policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    /// Cookie only sent to same-site requests
    Strict,
    /// Cookie sent to same-site and top-level navigation
    Lax,
    /// Cookie sent to all requests (requires Secure=true in most browsers)
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => f.write_str("Strict"),
            SameSite::Lax => f.write_str("Lax"),
            SameSite::None => f.write_str("None"),
        }
    }
}

impl Cookie {
    pub(crate) fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        expires: Option<DateTime<Utc>>,
        options: &CookieOptions,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires,
            path: options.path.clone(),
            domain: options.domain.clone(),
            secure: options.secure,
            http_only: options.http_only,
            same_site: options.same_site,
        }
    }

    /// Cookie name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cookie value exactly as it will be sent, including the fingerprint for signed cookies.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Expiration timestamp, `None` for session cookies.
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    /// Cookie path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Cookie domain
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Secure attribute (HTTPS-only)
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// HttpOnly attribute (prevents JavaScript access)
    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    /// SameSite attribute
    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    /// Returns true if the cookie lives until the browser session ends.
    pub fn is_session(&self) -> bool {
        self.expires.is_none()
    }

    /// Returns true if the cookie has expired (past its expiration timestamp).
    pub fn is_expired(&self) -> bool {
        self.expires.is_some_and(|exp| Utc::now() > exp)
    }

    /// Formats the cookie as a `Set-Cookie` header line.
    ///
    /// Name and value are percent-encoded where they contain bytes that are not valid cookie
    /// octets. `+` is kept as is, so signed values keep their `<hash>+<value>` shape on the wire.
    pub fn to_set_cookie_string(&self) -> String {
        self.to_wire_cookie().encoded().to_string()
    }

    /// Encodes the cookie as a `Set-Cookie` header value.
    ///
    /// Fails when an attribute contains characters that are not allowed in a header. The error
    /// only carries the cookie name, never its value.
    pub fn to_header_value(&self) -> Result<HeaderValue, CookieError> {
        HeaderValue::from_str(&self.to_set_cookie_string()).map_err(|_| {
            CookieError::InvalidHeaderValue {
                name: self.name.clone(),
            }
        })
    }

    fn to_wire_cookie(&self) -> cookie::Cookie<'static> {
        let mut builder = cookie::Cookie::build((self.name.clone(), self.value.clone()))
            .secure(self.secure)
            .http_only(self.http_only);

        if !self.path.is_empty() {
            builder = builder.path(self.path.clone());
        }
        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }
        if let Some(same_site) = self.same_site {
            builder = builder.same_site(same_site.into());
        }
        if let Some(expires) = self.expires {
            builder = builder.expires(to_offset_date_time(expires));
        }

        builder.build()
    }
}

impl From<SameSite> for cookie::SameSite {
    fn from(value: SameSite) -> Self {
        match value {
            SameSite::Strict => cookie::SameSite::Strict,
            SameSite::Lax => cookie::SameSite::Lax,
            SameSite::None => cookie::SameSite::None,
        }
    }
}

fn to_offset_date_time(expires: DateTime<Utc>) -> OffsetDateTime {
    let timestamp = expires.timestamp();
    OffsetDateTime::from_unix_timestamp(timestamp).unwrap_or(if timestamp > 0 {
        PrimitiveDateTime::MAX.assume_utc()
    } else {
        OffsetDateTime::UNIX_EPOCH
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn cookie_with_expiry(expires: Option<DateTime<Utc>>) -> Cookie {
        Cookie::new("session", "token", expires, &CookieOptions::default())
    }

    #[test]
    fn test_new_copies_options() {
        let options = CookieOptions::new("/app", Some("example.com".to_string()), true, false)
            .with_same_site(SameSite::Lax);
        let cookie = Cookie::new("session", "token", None, &options);

        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "token");
        assert_eq!(cookie.path(), "/app");
        assert_eq!(cookie.domain(), Some("example.com"));
        assert!(cookie.is_secure());
        assert!(!cookie.is_http_only());
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_is_expired_with_past_timestamp() {
        let cookie = cookie_with_expiry(Some(Utc::now() - Duration::hours(1)));
        assert!(cookie.is_expired());
        assert!(!cookie.is_session());
    }

    #[test]
    fn test_is_expired_with_future_timestamp() {
        let cookie = cookie_with_expiry(Some(Utc::now() + Duration::hours(1)));
        assert!(!cookie.is_expired());
    }

    #[test]
    fn test_session_cookie_never_expires() {
        let cookie = cookie_with_expiry(None);
        assert!(cookie.is_session());
        assert!(!cookie.is_expired());
    }

    /// Splits a `Set-Cookie` line into its `name=value` pair and its sorted attributes.
    fn split_set_cookie(line: &str) -> (&str, Vec<&str>) {
        let mut parts = line.split("; ");
        let pair = parts.next().unwrap_or_default();
        let mut attributes: Vec<_> = parts.collect();
        attributes.sort_unstable();
        (pair, attributes)
    }

    #[test]
    fn test_set_cookie_string_for_session_cookie() {
        let cookie = cookie_with_expiry(None);
        let line = cookie.to_set_cookie_string();

        assert_eq!(
            split_set_cookie(&line),
            ("session=token", vec!["HttpOnly", "Path=/"])
        );
    }

    #[test]
    fn test_set_cookie_string_with_all_attributes() {
        let options = CookieOptions::new("/app", Some("example.com".to_string()), true, true)
            .with_same_site(SameSite::Strict);
        let expires = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        let cookie = Cookie::new("session", "token", Some(expires), &options);
        let line = cookie.to_set_cookie_string();

        assert_eq!(
            split_set_cookie(&line),
            (
                "session=token",
                vec![
                    "Domain=example.com",
                    "Expires=Wed, 02 Jan 2030 03:04:05 GMT",
                    "HttpOnly",
                    "Path=/app",
                    "SameSite=Strict",
                    "Secure",
                ]
            )
        );
    }

    #[test]
    fn test_set_cookie_string_omits_disabled_flags() {
        let cookie = Cookie::new("prefs", "dark", None, &CookieOptions::new("/", None, false, false));
        assert_eq!(cookie.to_set_cookie_string(), "prefs=dark; Path=/");
    }

    #[test]
    fn test_set_cookie_string_encodes_separators_but_keeps_plus() {
        let options = CookieOptions::new("/", None, false, false);
        let cookie = Cookie::new("prefs", "abc+a b;c%", None, &options);

        assert_eq!(cookie.to_set_cookie_string(), "prefs=abc+a%20b%3Bc%25; Path=/");
    }

    #[test]
    fn test_set_cookie_string_far_future_expiry_has_four_digit_year() {
        let expires = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let cookie = cookie_with_expiry(Some(expires));

        assert!(cookie
            .to_set_cookie_string()
            .contains("Expires=Fri, 31 Dec 9999 23:59:59 GMT"));
    }

    #[test]
    fn test_to_header_value_rejects_control_characters_in_domain() {
        let options = CookieOptions::new("/", Some("exa\nmple.com".to_string()), false, true);
        let cookie = Cookie::new("session", "value", None, &options);

        let result = cookie.to_header_value();
        assert!(matches!(
            result,
            Err(CookieError::InvalidHeaderValue { name }) if name == "session"
        ));
    }

    #[test]
    fn test_to_header_value_encodes_control_characters() {
        let cookie = Cookie::new("bad\nname", "line\nbreak", None, &CookieOptions::default());

        let header = cookie.to_header_value().unwrap();
        let (pair, _) = split_set_cookie(header.to_str().unwrap());
        assert_eq!(pair, "bad%0Aname=line%0Abreak");
    }
}
