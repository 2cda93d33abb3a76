//! # Domain Layer
//!
//! Contracts of the event dispatcher and the domain events it carries.
//! This crate has no I/O and no logging; implementations live in
//! `evd-infrastructure`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`events`] | Event, handler and dispatcher contracts plus concrete events |
//! | [`error`] | Domain error type and `Result` alias |

pub mod error;
pub mod events;

pub use error::{Error, HandlerFailure, Result};
