//! I/O helpers for catalog files and configuration.

pub mod catalog_store;
pub mod config;
pub mod init;
