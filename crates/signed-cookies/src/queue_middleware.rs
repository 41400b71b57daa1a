use http::{Request, Response};

use crate::{CookieJar, CookieOptions, SigningKey};

/// Middleware that attaches queued cookies to outgoing responses.
///
/// For every request it builds a [`CookieJar`] from the request's cookies, hands the jar to the
/// inner handler, and once the handler has produced a response appends every cookie the handler
/// queued with [`CookieJar::put`] as a `Set-Cookie` header. This is the only place queued cookies
/// become visible to the client.
///
/// The middleware only holds configuration, so one instance can serve concurrent requests.
#[derive(Clone, Debug)]
pub struct QueueMiddleware {
    key: SigningKey,
    options: CookieOptions,
}

impl QueueMiddleware {
    /// Creates a new queue middleware signing cookies with `key` and stamping `options`.
    pub fn new(key: SigningKey, options: CookieOptions) -> Self {
        Self { key, options }
    }

    /// Builds the jar for a single request.
    ///
    /// Hosts that drive the request lifecycle themselves can use this together with
    /// [`CookieJar::move_queued`] instead of [`handle`](Self::handle).
    pub fn jar_for<B>(&self, request: &Request<B>) -> CookieJar {
        CookieJar::from_request(request, self.key.clone(), self.options.clone())
    }

    /// Handle an incoming request.
    ///
    /// Runs `next` with the request and the request's jar, then moves the queued cookies onto
    /// the response it returned, in the order they were queued.
    pub fn handle<B, R, F>(&self, request: Request<B>, next: F) -> Response<R>
    where
        F: FnOnce(Request<B>, &mut CookieJar) -> Response<R>,
    {
        let mut jar = self.jar_for(&request);

        let mut response = next(request, &mut jar);
        jar.move_queued(&mut response);

        response
    }
}
