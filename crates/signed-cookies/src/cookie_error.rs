/// Errors that can occur when configuring a jar or rendering a cookie for a response.
///
/// Verification failures of inbound cookies are not errors: a cookie that fails its fingerprint
/// check is reported as absent.
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    /// The secret key used for fingerprinting is unusable
    #[error("Invalid signing key: {0}")]
    InvalidKey(&'static str),

    /// The rendered `Set-Cookie` line is not a valid HTTP header value
    #[error("Cookie cannot be encoded as a header value: {name}")]
    InvalidHeaderValue {
        /// Name of the offending cookie
        name: String,
    },
}
