use std::collections::HashMap;

use cookie::Cookie;
use http::{header, HeaderMap};

/// Raw cookie values sent by the client, keyed by name.
///
/// Built from the `Cookie` request headers. Names and values are percent-decoded and one pair of
/// surrounding double quotes is removed from values. Pairs without a name, without `=` or that do
/// not decode to UTF-8 are dropped. When the client sends the same name twice the first
/// occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestCookies {
    cookies: HashMap<String, String>,
}

impl RequestCookies {
    /// Reads every `Cookie` header in `headers`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = HashMap::new();

        for header_value in headers.get_all(header::COOKIE) {
            let Ok(line) = header_value.to_str() else {
                tracing::debug!("Ignoring Cookie header that is not valid ASCII");
                continue;
            };

            for parsed in Cookie::split_parse_encoded(line) {
                match parsed {
                    Ok(cookie) => {
                        cookies
                            .entry(cookie.name().to_string())
                            .or_insert_with(|| cookie.value_trimmed().to_string());
                    }
                    Err(e) => {
                        tracing::debug!("Ignoring malformed cookie pair: {e}");
                    }
                }
            }
        }

        Self { cookies }
    }

    /// Builds the collection from already decoded name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut cookies = HashMap::new();
        for (name, value) in pairs {
            cookies.entry(name.into()).or_insert_with(|| value.into());
        }
        Self { cookies }
    }

    /// Returns the raw value of the cookie called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Returns the number of distinct cookie names.
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Returns true if the client sent no cookies.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Iterates over the cookie names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cookies.keys().map(String::as_str)
    }
}
