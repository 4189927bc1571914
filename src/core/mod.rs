pub mod app;
pub mod avatars;
pub mod cli;
pub mod config;
pub mod ops;
pub mod paths;
pub mod purpose;
pub mod record;
pub mod store;
