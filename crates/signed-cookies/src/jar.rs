use http::{header, HeaderMap, Request, Response};

use crate::{
    Cookie, CookieFactory, CookieOptions, RequestCookies, SigningKey, FOREVER_MINUTES,
};

/// Fallback returned by [`CookieJar::get_or`] when a cookie is missing or fails verification.
pub enum DefaultValue<'a> {
    /// A ready value
    Literal(String),
    /// Computed only when the fallback is actually needed
    Lazy(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> DefaultValue<'a> {
    /// Wraps a closure that is evaluated only on a miss.
    pub fn lazy(f: impl FnOnce() -> String + 'a) -> Self {
        DefaultValue::Lazy(Box::new(f))
    }

    fn resolve(self) -> String {
        match self {
            DefaultValue::Literal(value) => value,
            DefaultValue::Lazy(f) => f(),
        }
    }
}

impl From<String> for DefaultValue<'_> {
    fn from(value: String) -> Self {
        DefaultValue::Literal(value)
    }
}

impl From<&str> for DefaultValue<'_> {
    fn from(value: &str) -> Self {
        DefaultValue::Literal(value.to_string())
    }
}

/// Per-request cookie jar handing out signed cookies.
///
/// Outgoing values are fingerprinted with the jar's [`SigningKey`]; incoming values are only
/// returned when their fingerprint verifies. Cookies created with [`put`](Self::put) are queued
/// and attached to the response by [`move_queued`](Self::move_queued), normally called by
/// [`QueueMiddleware`](crate::QueueMiddleware) once the handler has produced its response.
#[derive(Debug)]
pub struct CookieJar {
    request_cookies: RequestCookies,
    key: SigningKey,
    factory: CookieFactory,
    queued: Vec<Cookie>,
}

impl CookieJar {
    /// Creates a jar over the cookies the client sent.
    pub fn new(request_cookies: RequestCookies, key: SigningKey, options: CookieOptions) -> Self {
        Self {
            request_cookies,
            key,
            factory: CookieFactory::new(options),
            queued: Vec::new(),
        }
    }

    /// Creates a jar from the `Cookie` headers of a request.
    pub fn from_headers(headers: &HeaderMap, key: SigningKey, options: CookieOptions) -> Self {
        Self::new(RequestCookies::from_headers(headers), key, options)
    }

    /// Creates a jar for `request`.
    pub fn from_request<B>(request: &Request<B>, key: SigningKey, options: CookieOptions) -> Self {
        Self::from_headers(request.headers(), key, options)
    }

    /// Determine if a cookie exists and carries a valid fingerprint.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get the verified value of the given cookie.
    ///
    /// A cookie that is missing, was never signed or was modified on the client is reported as
    /// `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        let raw = self.request_cookies.get(key)?;

        let value = self.parse(raw);
        if value.is_none() {
            tracing::debug!(cookie_name = %key, "Discarding cookie with invalid fingerprint");
        }
        value
    }

    /// Get the verified value of the given cookie, or `default` if there is none.
    pub fn get_or<'a>(&self, key: &str, default: impl Into<DefaultValue<'a>>) -> String {
        match self.get(key) {
            Some(value) => value,
            None => default.into().resolve(),
        }
    }

    /// Create a signed cookie and put it in the queue.
    pub fn put(
        &mut self,
        name: impl Into<String>,
        value: impl AsRef<str>,
        minutes: i64,
    ) -> Cookie {
        let cookie = self.make(name, value, minutes);
        self.queued.push(cookie.clone());
        cookie
    }

    /// Create a signed cookie living for `minutes`; `0` creates a session cookie.
    pub fn make(&self, name: impl Into<String>, value: impl AsRef<str>, minutes: i64) -> Cookie {
        self.factory.make(name, self.key.sign(value.as_ref()), minutes)
    }

    /// Create a signed cookie that lasts "forever" (five years).
    pub fn forever(&self, name: impl Into<String>, value: impl AsRef<str>) -> Cookie {
        self.factory.forever(name, self.key.sign(value.as_ref()))
    }

    /// Expire the given cookie.
    pub fn forget(&self, name: impl Into<String>) -> Cookie {
        self.make(name, "", -FOREVER_MINUTES)
    }

    /// Hash the given cookie value using the key.
    pub fn hash(&self, value: &str) -> String {
        self.key.hash(value)
    }

    fn parse(&self, raw: &str) -> Option<String> {
        self.key.verify(raw)
    }

    /// Set all of the queued cookies on a response, in the order they were queued.
    ///
    /// The queue is left untouched, so calling this twice attaches every cookie twice. Cookies
    /// that cannot be encoded as a header value are skipped with a warning.
    pub fn move_queued<B>(&self, response: &mut Response<B>) {
        let headers = response.headers_mut();
        for cookie in &self.queued {
            match cookie.to_header_value() {
                Ok(value) => {
                    headers.append(header::SET_COOKIE, value);
                }
                Err(e) => {
                    tracing::warn!("Failed to attach queued cookie: {e}");
                }
            }
        }

        tracing::trace!(count = self.queued.len(), "Moved queued cookies to response");
    }

    /// The cookies waiting to be attached to the response.
    pub fn queued_cookies(&self) -> &[Cookie] {
        &self.queued
    }

    /// The cookies the client sent with the request.
    pub fn request_cookies(&self) -> &RequestCookies {
        &self.request_cookies
    }
}
