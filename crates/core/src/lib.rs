//! Domain types, errors and pure logic for the DVD rental service.
//!
//! Nothing in this crate performs I/O. Database access lives in
//! `dvdrental_db`; HTTP concerns live in `dvdrental_api`.

pub mod error;
pub mod pagination;
pub mod rental;
pub mod report;
pub mod types;
