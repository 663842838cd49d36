// Data models for the URL lookup pipeline
pub mod conversation;
pub mod lookup;
