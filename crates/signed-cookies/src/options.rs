use serde::{Deserialize, Serialize};

use crate::SameSite;

/// Attributes stamped onto every cookie a factory or jar creates.
///
/// Deserializes from host configuration with camelCase keys. Keys that are missing fall back to
/// the defaults: `path = "/"`, no domain, `secure = false`, `httpOnly = true` and no SameSite
/// attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CookieOptions {
    /// Path attribute
    pub path: String,
    /// Domain attribute, omitted when `None`
    pub domain: Option<String>,
    /// Secure attribute (HTTPS-only)
    pub secure: bool,
    /// HttpOnly attribute (prevents JavaScript access)
    pub http_only: bool,
    /// SameSite attribute, omitted when `None`
    pub same_site: Option<SameSite>,
}

impl CookieOptions {
    /// Creates options from the four classic cookie attributes, without a SameSite attribute.
    pub fn new(
        path: impl Into<String>,
        domain: Option<String>,
        secure: bool,
        http_only: bool,
    ) -> Self {
        Self {
            path: path.into(),
            domain,
            secure,
            http_only,
            same_site: None,
        }
    }

    /// Returns these options with the given SameSite attribute.
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self::new("/", None, false, true)
    }
}
