use crate::{Cookie, CookieFactory, CookieOptions};

/// A [`CookieFactory`] that remembers every cookie it created.
///
/// Useful for callers that attach unsigned cookies to a response themselves.
#[derive(Clone, Debug, Default)]
pub struct CookieCreator {
    factory: CookieFactory,
    cookies: Vec<Cookie>,
}

impl CookieCreator {
    /// Creates an empty creator stamping `options` onto every cookie.
    pub fn new(options: CookieOptions) -> Self {
        Self {
            factory: CookieFactory::new(options),
            cookies: Vec::new(),
        }
    }

    /// Creates and records a cookie living for `minutes`; `0` creates a session cookie.
    pub fn make(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        minutes: i64,
    ) -> Cookie {
        let cookie = self.factory.make(name, value, minutes);
        self.cookies.push(cookie.clone());
        cookie
    }

    /// Creates and records a cookie that lasts "forever" (five years).
    pub fn forever(&mut self, name: impl Into<String>, value: impl Into<String>) -> Cookie {
        let cookie = self.factory.forever(name, value);
        self.cookies.push(cookie.clone());
        cookie
    }

    /// Creates and records an expired cookie that makes the client delete `name`.
    pub fn forget(&mut self, name: impl Into<String>) -> Cookie {
        let cookie = self.factory.forget(name);
        self.cookies.push(cookie.clone());
        cookie
    }

    /// All cookies created so far, in creation order.
    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookies_are_recorded_in_creation_order() {
        let mut creator = CookieCreator::default();
        creator.make("first", "1", 0);
        creator.forever("second", "2");
        creator.forget("third");

        let names: Vec<_> = creator.cookies().iter().map(Cookie::name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_values_are_not_signed() {
        let mut creator = CookieCreator::default();
        let cookie = creator.make("color", "blue", 10);

        assert_eq!(cookie.value(), "blue");
        assert_eq!(creator.cookies(), &[cookie]);
    }

    #[test]
    fn test_forget_records_expired_cookie() {
        let mut creator = CookieCreator::new(CookieOptions::new("/admin", None, true, true));
        let cookie = creator.forget("session");

        assert!(cookie.is_expired());
        assert_eq!(cookie.path(), "/admin");
        assert_eq!(creator.cookies().len(), 1);
    }
}
