//! Request handlers.
//!
//! Catalog and report handlers call the repositories in `dvdrental_db`
//! directly. Rental writes go through [`dvdrental_db::lifecycle::RentalLifecycle`]
//! so each one runs in a single transaction. Errors map to HTTP via
//! [`crate::error::AppError`].

pub mod customer;
pub mod film;
pub mod rental;
pub mod report;
pub mod staff;
