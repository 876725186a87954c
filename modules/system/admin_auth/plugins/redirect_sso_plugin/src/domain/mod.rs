//! Domain layer for the redirect SSO plugin.

pub mod factory;
pub mod strategy;

pub use factory::RedirectSsoFactory;
pub use strategy::RedirectSsoStrategy;
