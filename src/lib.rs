pub mod error;
pub mod types;

pub mod analyze;
pub mod classify;
pub mod config;
pub mod copy;
pub mod list;
pub mod sanitize;
pub mod service;
pub mod store;
