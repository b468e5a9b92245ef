//! Client library for the minebans.com global ban feeds.
//!
//! MineBans tracks bans issued across a network of game servers. This crate
//! wraps its three public JSON feeds behind a small blocking client:
//!
//! - [`MineBansClient::server_moderators`] — players allowed to upload data
//!   for the server (needs the server API key)
//! - [`MineBansClient::player_bans`] — all global bans against a player
//! - [`MineBansClient::server_bans`] — all bans uploaded by the server
//!   (needs the server API key)
//!
//! ```no_run
//! use minebans_webapi::MineBansClient;
//!
//! # fn main() -> Result<(), minebans_webapi::ApiError> {
//! let client = MineBansClient::new(None);
//! for ban in client.player_bans("Notch")? {
//!     println!("{} banned by {}: {}", ban.player_name, ban.issued_by, ban.reason);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::{MineBansClient, MineBansClientBuilder};
pub use error::ApiError;
pub use models::PlayerBan;
