pub mod devlog;
pub mod health;
pub mod not_found;
