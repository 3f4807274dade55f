pub mod catalog;
pub mod challenge;
pub mod config;
pub mod level;
pub mod profile;
pub mod session;
