//! Transactional rental lifecycle: allocate, return and cancel.
//!
//! Each operation opens its own transaction on the pool and passes the
//! transaction handle into every repository call it makes, so either all of
//! its writes commit or none do. Dropping the transaction on an early return
//! rolls it back.
//!
//! Two safeguards keep a copy from being rented twice:
//! - the candidate copy is locked with `FOR UPDATE SKIP LOCKED`;
//! - the partial unique index `uq_rentals_active_inventory` rejects a second
//!   active rental for the same copy. The allocator then retries with the
//!   next free copy, and reports a conflict only once none is left or the
//!   retries run out.

use chrono::Utc;
use dvdrental_core::error::CoreError;
use dvdrental_core::rental::{ensure_active, no_copies_available, validate_rental_request};
use dvdrental_core::types::{DbId, Timestamp};
use sqlx::{Connection, PgPool, Postgres, Transaction};

use crate::models::inventory::InventoryItem;
use crate::models::payment::NewPayment;
use crate::models::rental::{CancelledRental, CreateRental, Rental};
use crate::repositories::{
    CustomerRepo, FilmRepo, InventoryRepo, PaymentRepo, RentalRepo, StaffRepo,
};

/// Constraint guarding the one-active-rental-per-copy invariant.
pub const ACTIVE_INVENTORY_CONSTRAINT: &str = "uq_rentals_active_inventory";

/// Copies tried before a lost race is reported as a conflict.
const CLAIM_ATTEMPTS: u32 = 3;

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Errors from the rental lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// A domain rule rejected the operation (not found, conflict, validation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database failed underneath the operation.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Whether `err` is a unique violation of the named constraint.
fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

/// Entry points for the rental state machine.
pub struct RentalLifecycle;

impl RentalLifecycle {
    /// Rent a copy of a film.
    ///
    /// Checks the customer (must exist and be active), the staff member and
    /// the film, in that order, then locks the lowest-id free copy and writes
    /// the rental and its payment (`amount = film.rental_rate`) in one
    /// transaction.
    pub async fn allocate(pool: &PgPool, input: &CreateRental) -> LifecycleResult<Rental> {
        validate_rental_request(input.customer_id, input.film_id, input.staff_id, input.days)?;

        let now = Utc::now();
        let mut tx = pool.begin().await?;

        let customer = CustomerRepo::find_active_by_id(&mut *tx, input.customer_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Customer",
                id: input.customer_id,
            })?;

        let staff = StaffRepo::find_by_id(&mut *tx, input.staff_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Staff",
                id: input.staff_id,
            })?;

        let film = FilmRepo::find_by_id(&mut *tx, input.film_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Film",
                id: input.film_id,
            })?;

        let (copy, rental) = Self::claim_copy(&mut tx, film.id, customer.id, staff.id, now).await?;

        let payment = PaymentRepo::insert(
            &mut tx,
            &NewPayment {
                customer_id: customer.id,
                staff_id: staff.id,
                rental_id: rental.id,
                amount: film.rental_rate,
                payment_date: now,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            rental_id = rental.id,
            payment_id = payment.id,
            inventory_id = copy.id,
            film_id = film.id,
            customer_id = customer.id,
            staff_id = staff.id,
            days = input.days,
            amount = %payment.amount,
            "Rental created"
        );

        Ok(rental)
    }

    /// Lock the lowest-id free copy of the film and insert the rental row.
    ///
    /// The lock query reads a snapshot taken when it starts, so a copy rented
    /// by a transaction that commits just before the lock is acquired can
    /// still be returned. The insert then trips the active-rental index. Each
    /// insert runs in a savepoint so the outer transaction survives that, and
    /// the next attempt sees the committed rental and moves on to another copy.
    async fn claim_copy(
        tx: &mut Transaction<'_, Postgres>,
        film_id: DbId,
        customer_id: DbId,
        staff_id: DbId,
        now: Timestamp,
    ) -> LifecycleResult<(InventoryItem, Rental)> {
        for attempt in 1..=CLAIM_ATTEMPTS {
            let copy = InventoryRepo::lock_available_copy(tx, film_id)
                .await?
                .ok_or_else(|| no_copies_available(film_id))?;

            let mut savepoint = tx.begin().await?;
            let inserted =
                RentalRepo::insert(&mut savepoint, copy.id, customer_id, staff_id, now).await;
            match inserted {
                Ok(rental) => {
                    savepoint.commit().await?;
                    return Ok((copy, rental));
                }
                Err(err) if is_unique_violation(&err, ACTIVE_INVENTORY_CONSTRAINT) => {
                    savepoint.rollback().await?;
                    tracing::warn!(
                        film_id,
                        inventory_id = copy.id,
                        attempt,
                        "Copy taken by a concurrent rental"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(no_copies_available(film_id).into())
    }

    /// Mark an active rental as returned.
    pub async fn return_rental(pool: &PgPool, rental_id: DbId) -> LifecycleResult<Rental> {
        let mut tx = pool.begin().await?;

        let rental = RentalRepo::lock_by_id(&mut tx, rental_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Rental",
                id: rental_id,
            })?;
        ensure_active(rental.id, rental.return_date)?;

        let returned = RentalRepo::mark_returned(&mut tx, rental.id, Utc::now())
            .await?
            .ok_or_else(|| {
                CoreError::Internal(format!("Locked rental {rental_id} could not be updated"))
            })?;

        tx.commit().await?;

        tracing::info!(
            rental_id = returned.id,
            inventory_id = returned.inventory_id,
            "Rental returned"
        );

        Ok(returned)
    }

    /// Cancel an active rental, deleting it together with its payment.
    pub async fn cancel(pool: &PgPool, rental_id: DbId) -> LifecycleResult<CancelledRental> {
        let mut tx = pool.begin().await?;

        let rental = RentalRepo::lock_by_id(&mut tx, rental_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Rental",
                id: rental_id,
            })?;
        ensure_active(rental.id, rental.return_date)?;

        let payment_removed = PaymentRepo::delete_by_rental(&mut tx, rental.id).await?;
        RentalRepo::delete(&mut tx, rental.id).await?;

        tx.commit().await?;

        tracing::info!(
            rental_id = rental.id,
            inventory_id = rental.inventory_id,
            payment_removed,
            "Rental cancelled"
        );

        Ok(CancelledRental {
            rental_id: rental.id,
            payment_removed,
        })
    }
}
