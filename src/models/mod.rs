pub mod ban;

pub use ban::PlayerBan;
