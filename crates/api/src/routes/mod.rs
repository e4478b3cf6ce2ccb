pub mod customers;
pub mod films;
pub mod health;
pub mod reports;
pub mod rentals;
pub mod staff;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /customers                                 list active customers
/// /customers/{id}                            get customer
///
/// /films                                     list films
/// /films/{id}                                get film
/// /films/{id}/availability                   copy counts
///
/// /staff                                     list active staff
///
/// /rentals                                   list recent, create (POST)
/// /rentals/{id}                              get, cancel (DELETE)
/// /rentals/{id}/return                       return (PUT)
/// /rentals/{id}/payment                      payment for the rental
///
/// /reports/customer/{id}                     customer rental history
/// /reports/unreturned                        active rentals with lateness
/// /reports/most-rented                       films ranked by rental count
/// /reports/staff-earnings                    payments per staff member
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog reads.
        .nest("/customers", customers::router())
        .nest("/films", films::router())
        .nest("/staff", staff::router())
        // Rental lifecycle: allocate, return, cancel.
        .nest("/rentals", rentals::router())
        // Read-only aggregations.
        .nest("/reports", reports::router())
}
