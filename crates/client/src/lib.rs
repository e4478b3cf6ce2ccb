//! Typed HTTP client for the DVD rental API.
//!
//! Front ends talk to the server through [`RentalApi`] instead of building
//! requests by hand. Every endpoint has one async method that returns a typed
//! response or a [`ClientError`].

pub mod api;
pub mod types;

pub use api::{ClientError, RentalApi};
