pub mod api;
pub mod config;
pub mod error;
pub mod exercise;
pub mod format;
pub mod input;
