//! Core library components.
//!
//! This module contains the reusable logic for the credential store,
//! encryption, settings and profile materialization.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod materialize;
pub mod store;
pub mod validation;
