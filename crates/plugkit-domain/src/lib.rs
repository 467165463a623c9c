//! Domain layer for plugkit
//!
//! Pure contracts shared by the wiring layer and by host adapters:
//! the error taxonomy and the port traits describing what a plugin host
//! must expose (event subscription, command lookup, executor slots).
//!
//! This crate performs no registration itself and holds no state; it only
//! defines the vocabulary the rest of the workspace speaks.

pub mod error;
pub mod ports;

pub use error::{Error, Result};
