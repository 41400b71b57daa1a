use chrono::{DateTime, TimeDelta, Utc};

use crate::{Cookie, CookieOptions};

/// Lifetime used by `forever`, in minutes (five years).
pub const FOREVER_MINUTES: i64 = 2_628_000;

/// 9999-12-31T23:59:59Z, the last instant an `Expires` attribute can carry.
const LATEST_EXPIRY_TIMESTAMP: i64 = 253_402_300_799;

fn latest_expiry() -> DateTime<Utc> {
    DateTime::from_timestamp(LATEST_EXPIRY_TIMESTAMP, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Computes the expiry of a cookie living `minutes` from `now`.
///
/// Zero means a session cookie. Negative values produce an expiry in the past. The result is
/// clamped to the range from the Unix epoch to the end of year 9999.
pub(crate) fn expiry_after(minutes: i64, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if minutes == 0 {
        return None;
    }

    let expires = TimeDelta::try_minutes(minutes)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(if minutes > 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::UNIX_EPOCH
        });

    Some(expires.clamp(DateTime::<Utc>::UNIX_EPOCH, latest_expiry()))
}

/// Creates unsigned cookies that share a set of default options.
///
/// Typically every cookie created by an application carries the same path, domain and flags, so
/// they are configured once here instead of at every call site.
#[derive(Clone, Debug, Default)]
pub struct CookieFactory {
    options: CookieOptions,
}

impl CookieFactory {
    /// Creates a factory stamping `options` onto every cookie.
    pub fn new(options: CookieOptions) -> Self {
        Self { options }
    }

    /// The options applied to created cookies.
    pub fn options(&self) -> &CookieOptions {
        &self.options
    }

    /// Creates a cookie living for `minutes`; `0` creates a session cookie.
    pub fn make(&self, name: impl Into<String>, value: impl Into<String>, minutes: i64) -> Cookie {
        Cookie::new(name, value, expiry_after(minutes, Utc::now()), &self.options)
    }

    /// Creates a cookie that lasts "forever" (five years).
    pub fn forever(&self, name: impl Into<String>, value: impl Into<String>) -> Cookie {
        self.make(name, value, FOREVER_MINUTES)
    }

    /// Creates an already expired, empty cookie that makes the client delete `name`.
    pub fn forget(&self, name: impl Into<String>) -> Cookie {
        self.make(name, "", -FOREVER_MINUTES)
    }
}
