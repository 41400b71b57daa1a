#![doc = include_str!("../README.md")]

mod cookie;
pub use self::cookie::{Cookie, SameSite};
mod cookie_error;
pub use cookie_error::CookieError;
mod creator;
pub use creator::CookieCreator;
mod factory;
pub use factory::{CookieFactory, FOREVER_MINUTES};
mod jar;
pub use jar::{CookieJar, DefaultValue};
mod options;
pub use options::CookieOptions;
mod queue_middleware;
pub use queue_middleware::QueueMiddleware;
mod request_cookies;
pub use request_cookies::RequestCookies;
mod signing;
pub use signing::{SigningKey, SIGNATURE_SEPARATOR};
