//! Provider adapters implementing [`DataSource`](crate::DataSource).

pub mod fixture;
pub mod yahoo;

pub use fixture::{FixtureCall, FixtureRatios, FixtureSource};
pub use yahoo::{YahooAdapter, YahooSession, YAHOO_COOKIE_ENV};
