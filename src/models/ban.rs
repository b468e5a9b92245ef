use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One global ban issued against a player, as served by the MineBans feeds.
///
/// Records are plain values produced by deserializing a feed entry; the
/// client never mutates or stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBan {
    /// Name of the player the ban was issued against.
    pub player_name: String,
    /// Name of the moderator that issued the ban.
    pub issued_by: String,
    /// Name of the server the ban was issued from.
    pub server_name: String,
    /// When the ban was issued, as Unix epoch seconds.
    pub time: i64,
    /// Short reason, e.g. "griefing".
    pub reason: String,
    /// Free-text description of the incident.
    pub long_reason: String,
}

impl PlayerBan {
    /// The issue time as a UTC timestamp. `None` if `time` is outside the
    /// representable range.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}
