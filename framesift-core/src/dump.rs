pub mod discover;
pub mod metadata;
