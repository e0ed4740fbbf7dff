pub mod cli;
pub mod config;
pub mod errors;
pub mod guidance;
pub mod keywords;
pub mod layout;
pub mod models;
