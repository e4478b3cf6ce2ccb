//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where the service creates rows
//! - Read-model structs for joined listings and reports

pub mod customer;
pub mod film;
pub mod inventory;
pub mod payment;
pub mod rental;
pub mod report;
pub mod staff;
