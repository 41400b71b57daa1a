//! Cookie fingerprinting.
//!
//! A signed cookie value has the wire format `<hash>+<value>`, where `<hash>` is the lowercase
//! hex HMAC-SHA1 of `<value>` under the application's secret key. The hash is always the first
//! segment, so values are free to contain `+` themselves.

use std::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

use crate::CookieError;

type HmacSha1 = Hmac<Sha1>;

/// Separator between the fingerprint and the value.
pub const SIGNATURE_SEPARATOR: char = '+';

/// Secret key used to fingerprint and verify cookie values.
///
/// The key material is never exposed through `Debug`.
#[derive(Clone)]
pub struct SigningKey {
    mac: HmacSha1,
}

impl SigningKey {
    /// Creates a signing key from raw secret bytes.
    ///
    /// Returns [`CookieError::InvalidKey`] for an empty key.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, CookieError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(CookieError::InvalidKey("key must not be empty"));
        }

        let mac = <HmacSha1 as Mac>::new_from_slice(secret)
            .map_err(|_| CookieError::InvalidKey("key length is not supported"))?;
        Ok(Self { mac })
    }

    /// Hashes `value` with the key, returning the lowercase hex HMAC-SHA1.
    pub fn hash(&self, value: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(value.as_bytes());
        format!("{:x}", mac.finalize().into_bytes())
    }

    /// Wraps `value` in its fingerprint: `hash(value) + "+" + value`.
    pub fn sign(&self, value: &str) -> String {
        format!("{}{}{}", self.hash(value), SIGNATURE_SEPARATOR, value)
    }

    /// Recovers the value from a fingerprinted cookie value.
    ///
    /// Returns `None` when there is no separator (the cookie was never signed) or when the
    /// fingerprint does not match the remainder (the cookie was changed on the client). The hash
    /// comparison runs in constant time.
    pub fn verify(&self, signed: &str) -> Option<String> {
        let (hash, value) = signed.split_once(SIGNATURE_SEPARATOR)?;

        let expected = self.hash(value);
        if expected.as_bytes().ct_eq(hash.as_bytes()).into() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
