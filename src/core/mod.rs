//! Core library components.
//!
//! This module contains the reusable logic for turning encrypted, server-stored
//! secrets into plaintext configuration: decryption, fetch orchestration,
//! reference expansion and override resolution.

pub mod api;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod expand;
pub mod fetch;
pub mod format;
pub mod merge;
pub mod session;
pub mod types;
