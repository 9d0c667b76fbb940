//! YouTube push notifications over PubSubHubbub (WebSub).
//!
//! The hub verifies a subscription with a `GET` carrying `hub.challenge`, then
//! delivers each new or updated upload as an Atom entry in a `POST`. Both land
//! on the `/channels` routes; [`hub::HubClient`] issues the subscribe and
//! unsubscribe requests that set this up.

pub mod feed;
pub mod hub;

pub use feed::{FeedError, Publication, parse_publication};
pub use hub::{HubClient, HubError, HubMode, HubSettings, HubVerification};
