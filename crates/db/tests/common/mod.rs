//! Fixtures shared by the database integration tests.

#![allow(dead_code)]

use dvdrental_db::models::customer::{CreateCustomer, Customer};
use dvdrental_db::models::film::{CreateFilm, Film};
use dvdrental_db::models::inventory::{CreateInventoryItem, InventoryItem};
use dvdrental_db::models::rental::CreateRental;
use dvdrental_db::models::staff::{CreateStaff, Staff};
use dvdrental_db::repositories::{CustomerRepo, FilmRepo, InventoryRepo, StaffRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub async fn customer(pool: &PgPool, first_name: &str, last_name: &str) -> Customer {
    CustomerRepo::create(
        pool,
        &CreateCustomer {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: Some(format!("{}@example.com", first_name.to_lowercase())),
            is_active: None,
        },
    )
    .await
    .unwrap()
}

pub async fn staff(pool: &PgPool, username: &str) -> Staff {
    StaffRepo::create(
        pool,
        &CreateStaff {
            first_name: "Mike".to_string(),
            last_name: username.to_string(),
            email: None,
            username: username.to_string(),
            is_active: None,
        },
    )
    .await
    .unwrap()
}

pub async fn film(pool: &PgPool, title: &str, rate: Decimal, duration: i32) -> Film {
    FilmRepo::create(
        pool,
        &CreateFilm {
            title: title.to_string(),
            description: None,
            release_year: Some(2006),
            rental_duration: Some(duration),
            rental_rate: Some(rate),
            length_minutes: Some(90),
            replacement_cost: None,
            rating: Some("PG".to_string()),
        },
    )
    .await
    .unwrap()
}

pub async fn copies(pool: &PgPool, film_id: i64, count: usize) -> Vec<InventoryItem> {
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let item = InventoryRepo::create(
            pool,
            &CreateInventoryItem {
                film_id,
                store_id: None,
            },
        )
        .await
        .unwrap();
        items.push(item);
    }
    items
}

pub fn request(customer_id: i64, film_id: i64, staff_id: i64) -> CreateRental {
    CreateRental {
        customer_id,
        film_id,
        staff_id,
        days: 3,
    }
}

/// Number of active rentals holding the given copy.
pub async fn active_rentals_for_copy(pool: &PgPool, inventory_id: i64) -> i64 {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM rentals WHERE inventory_id = $1 AND return_date IS NULL",
    )
    .bind(inventory_id)
    .fetch_one(pool)
    .await
    .unwrap();
    count
}

pub async fn row_count(pool: &PgPool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
