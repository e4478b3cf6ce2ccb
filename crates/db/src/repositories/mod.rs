//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Listing methods accept `&PgPool`; methods that take part in a rental
//! lifecycle transaction accept any `PgExecutor` (a pool or `&mut *tx`)
//! or an explicit `&mut PgConnection`.

pub mod customer_repo;
pub mod film_repo;
pub mod inventory_repo;
pub mod payment_repo;
pub mod rental_repo;
pub mod report_repo;
pub mod staff_repo;

pub use customer_repo::CustomerRepo;
pub use film_repo::FilmRepo;
pub use inventory_repo::InventoryRepo;
pub use payment_repo::PaymentRepo;
pub use rental_repo::RentalRepo;
pub use report_repo::ReportRepo;
pub use staff_repo::StaffRepo;
