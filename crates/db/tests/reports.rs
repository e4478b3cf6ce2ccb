//! Integration tests for the reporting queries and catalog reads.

mod common;

use chrono::{DateTime, Duration, Utc};
use dvdrental_core::rental::RentalStatus;
use dvdrental_db::lifecycle::RentalLifecycle;
use dvdrental_db::repositories::{FilmRepo, InventoryRepo, RentalRepo, ReportRepo};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;

/// Move a rental's start date into the past.
async fn backdate(pool: &PgPool, rental_id: i64, days: i32) {
    sqlx::query("UPDATE rentals SET rental_date = NOW() - make_interval(days => $2) WHERE id = $1")
        .bind(rental_id)
        .bind(days)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Film availability
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_availability_counts_active_rentals(pool: PgPool) {
    let customer = common::customer(&pool, "Mary", "Smith").await;
    let staff = common::staff(&pool, "mike").await;
    let film = common::film(&pool, "Academy Dinosaur", dec!(0.99), 6).await;
    common::copies(&pool, film.id, 3).await;
    let request = common::request(customer.id, film.id, staff.id);

    let first = RentalLifecycle::allocate(&pool, &request).await.unwrap();
    RentalLifecycle::allocate(&pool, &request).await.unwrap();
    RentalLifecycle::return_rental(&pool, first.id).await.unwrap();

    let availability = FilmRepo::availability(&pool, film.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(availability.total_copies, 3);
    assert_eq!(availability.rented_copies, 1);
    assert_eq!(availability.available_copies, 2);

    let listed = InventoryRepo::list_by_film(&pool, film.id).await.unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_availability_missing_film_is_none(pool: PgPool) {
    assert!(FilmRepo::availability(&pool, 77).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Customer history
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_history_reports_status_and_amount(pool: PgPool) {
    let customer = common::customer(&pool, "Patricia", "Johnson").await;
    let staff = common::staff(&pool, "mike").await;
    let cheap = common::film(&pool, "Adaptation Holes", dec!(2.99), 7).await;
    let pricey = common::film(&pool, "Affair Prejudice", dec!(4.99), 5).await;
    common::copies(&pool, cheap.id, 1).await;
    common::copies(&pool, pricey.id, 1).await;

    let older = RentalLifecycle::allocate(&pool, &common::request(customer.id, cheap.id, staff.id))
        .await
        .unwrap();
    backdate(&pool, older.id, 2).await;
    RentalLifecycle::return_rental(&pool, older.id).await.unwrap();
    let newer = RentalLifecycle::allocate(&pool, &common::request(customer.id, pricey.id, staff.id))
        .await
        .unwrap();

    let report = ReportRepo::customer_rentals(&pool, customer.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.customer_name, "Patricia Johnson");
    assert_eq!(report.customer_email.as_deref(), Some("patricia@example.com"));
    assert_eq!(report.total_rentals, 2);

    let first = &report.rentals[0];
    assert_eq!(first.rental_id, newer.id);
    assert_eq!(first.film_title, "Affair Prejudice");
    assert_eq!(first.status, RentalStatus::Active);
    assert_eq!(first.amount, dec!(4.99));

    let second = &report.rentals[1];
    assert_eq!(second.rental_id, older.id);
    assert_eq!(second.status, RentalStatus::Returned);
    assert!(second.return_date.is_some());
    assert_eq!(second.amount, dec!(2.99));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_history_missing_customer_is_none(pool: PgPool) {
    assert!(ReportRepo::customer_rentals(&pool, 5_000)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_history_without_payment_reports_zero(pool: PgPool) {
    let customer = common::customer(&pool, "Jennifer", "Davis").await;
    let staff = common::staff(&pool, "mike").await;
    let film = common::film(&pool, "African Egg", dec!(2.99), 6).await;
    let copies = common::copies(&pool, film.id, 1).await;

    sqlx::query("INSERT INTO rentals (inventory_id, customer_id, staff_id) VALUES ($1, $2, $3)")
        .bind(copies[0].id)
        .bind(customer.id)
        .bind(staff.id)
        .execute(&pool)
        .await
        .unwrap();

    let report = ReportRepo::customer_rentals(&pool, customer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.total_rentals, 1);
    assert_eq!(report.rentals[0].amount, Decimal::ZERO);
}

// ---------------------------------------------------------------------------
// Unreturned
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unreturned_computes_days_late(pool: PgPool) {
    let customer = common::customer(&pool, "Elizabeth", "Brown").await;
    let staff = common::staff(&pool, "mike").await;
    let film = common::film(&pool, "Agent Truman", dec!(2.99), 3).await;
    common::copies(&pool, film.id, 3).await;
    let request = common::request(customer.id, film.id, staff.id);

    let late = RentalLifecycle::allocate(&pool, &request).await.unwrap();
    backdate(&pool, late.id, 10).await;
    let on_time = RentalLifecycle::allocate(&pool, &request).await.unwrap();
    backdate(&pool, on_time.id, 1).await;
    let returned = RentalLifecycle::allocate(&pool, &request).await.unwrap();
    RentalLifecycle::return_rental(&pool, returned.id).await.unwrap();

    // Measure from the stored start date so the database and test clocks
    // never disagree about whole-day boundaries.
    let stored = RentalRepo::find_by_id(&pool, late.id).await.unwrap().unwrap();
    let now = stored.rental_date + Duration::days(10) + Duration::hours(1);

    let report = ReportRepo::unreturned(&pool, now).await.unwrap();
    assert_eq!(report.total_unreturned, 2);

    let oldest = &report.rentals[0];
    assert_eq!(oldest.rental_id, late.id);
    assert_eq!(oldest.customer_name, "Elizabeth Brown");
    assert_eq!(oldest.film_title, "Agent Truman");
    assert_eq!(oldest.days_rented, 10);
    assert_eq!(oldest.days_late, 7);
    assert_eq!(
        oldest.expected_return_date,
        oldest.rental_date + Duration::days(3)
    );

    let recent = &report.rentals[1];
    assert_eq!(recent.rental_id, on_time.id);
    assert_eq!(recent.days_rented, 1);
    assert_eq!(recent.days_late, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unreturned_tolerates_huge_rental_duration(pool: PgPool) {
    let customer = common::customer(&pool, "Barbara", "Jones").await;
    let staff = common::staff(&pool, "mike").await;
    let film = common::film(&pool, "Endless Summer", dec!(0.99), 100_000_000).await;
    common::copies(&pool, film.id, 1).await;

    let rental = RentalLifecycle::allocate(&pool, &common::request(customer.id, film.id, staff.id))
        .await
        .unwrap();

    let report = ReportRepo::unreturned(&pool, Utc::now()).await.unwrap();
    assert_eq!(report.total_unreturned, 1);
    assert_eq!(report.rentals[0].rental_id, rental.id);
    assert_eq!(report.rentals[0].days_late, 0);
    assert_eq!(report.rentals[0].expected_return_date, DateTime::<Utc>::MAX_UTC);
}

// ---------------------------------------------------------------------------
// Most rented
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_most_rented_ranks_by_count(pool: PgPool) {
    let customer = common::customer(&pool, "Maria", "Miller").await;
    let staff = common::staff(&pool, "mike").await;
    let popular = common::film(&pool, "Bucket Brotherhood", dec!(4.99), 7).await;
    let niche = common::film(&pool, "Rocketeer Mother", dec!(0.99), 5).await;
    let unrented = common::film(&pool, "Zorro Ark", dec!(4.99), 3).await;
    common::copies(&pool, popular.id, 3).await;
    common::copies(&pool, niche.id, 1).await;
    common::copies(&pool, unrented.id, 1).await;

    for _ in 0..3 {
        RentalLifecycle::allocate(&pool, &common::request(customer.id, popular.id, staff.id))
            .await
            .unwrap();
    }
    RentalLifecycle::allocate(&pool, &common::request(customer.id, niche.id, staff.id))
        .await
        .unwrap();

    let report = ReportRepo::most_rented(&pool, 10).await.unwrap();
    assert_eq!(report.total_films, 2);
    assert_eq!(report.films[0].film_id, popular.id);
    assert_eq!(report.films[0].rental_count, 3);
    assert_eq!(report.films[0].release_year, Some(2006));
    assert_eq!(report.films[1].film_id, niche.id);
    assert_eq!(report.films[1].rental_count, 1);

    let limited = ReportRepo::most_rented(&pool, 1).await.unwrap();
    assert_eq!(limited.total_films, 1);
    assert_eq!(limited.films[0].title, "Bucket Brotherhood");
}

// ---------------------------------------------------------------------------
// Staff earnings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_earnings_sums_payments(pool: PgPool) {
    let customer = common::customer(&pool, "Susan", "Wilson").await;
    let mike = common::staff(&pool, "mike").await;
    let jon = common::staff(&pool, "jon").await;
    let idle = common::staff(&pool, "idle").await;
    let film = common::film(&pool, "Chamber Italian", dec!(4.99), 7).await;
    let other = common::film(&pool, "Grosse Wonderful", dec!(2.99), 5).await;
    common::copies(&pool, film.id, 2).await;
    common::copies(&pool, other.id, 1).await;

    RentalLifecycle::allocate(&pool, &common::request(customer.id, film.id, mike.id))
        .await
        .unwrap();
    RentalLifecycle::allocate(&pool, &common::request(customer.id, other.id, mike.id))
        .await
        .unwrap();
    let cancelled = RentalLifecycle::allocate(&pool, &common::request(customer.id, film.id, jon.id))
        .await
        .unwrap();
    RentalLifecycle::cancel(&pool, cancelled.id).await.unwrap();

    let report = ReportRepo::staff_earnings(&pool).await.unwrap();
    assert_eq!(report.total_staff, 1, "cancelled payments do not count");

    let earnings = &report.staff[0];
    assert_eq!(earnings.staff_id, mike.id);
    assert_eq!(earnings.staff_name, "Mike mike");
    assert_eq!(earnings.total_transactions, 2);
    assert_eq!(earnings.total_earnings, dec!(7.98));
    assert!(report.staff.iter().all(|s| s.staff_id != idle.id));
}

// ---------------------------------------------------------------------------
// Recent rentals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_recent_newest_first(pool: PgPool) {
    let customer = common::customer(&pool, "Laura", "Rodriguez").await;
    let staff = common::staff(&pool, "mike").await;
    let film = common::film(&pool, "Fantasy Troopers", dec!(0.99), 6).await;
    common::copies(&pool, film.id, 2).await;
    let request = common::request(customer.id, film.id, staff.id);

    let older = RentalLifecycle::allocate(&pool, &request).await.unwrap();
    backdate(&pool, older.id, 4).await;
    let newer = RentalLifecycle::allocate(&pool, &request).await.unwrap();

    let items = RentalRepo::list_recent(&pool, 10).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].rental_id, newer.id);
    assert_eq!(items[0].customer_name, "Laura Rodriguez");
    assert_eq!(items[0].film_title, "Fantasy Troopers");
    assert_eq!(items[0].status, RentalStatus::Active);
    assert_eq!(items[1].rental_id, older.id);

    let limited = RentalRepo::list_recent(&pool, 1).await.unwrap();
    assert_eq!(limited.len(), 1);
}
