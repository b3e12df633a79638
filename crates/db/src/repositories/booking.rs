use crate::models::DbBooking;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use meetbook_core::models::booking::NewBooking;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_booking(pool: &Pool<Postgres>, booking: &NewBooking) -> Result<DbBooking, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, date={}, slot={}",
        id, booking.date, booking.time_slot
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, name, email, booking_date, time_slot, message, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, booking_date, time_slot, message, created_at
        "#,
    )
    .bind(id)
    .bind(&booking.name)
    .bind(&booking.email)
    .bind(booking.date)
    .bind(booking.time_slot.label())
    .bind(booking.message.as_deref())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(booking)
}

pub async fn get_bookings_by_date(pool: &Pool<Postgres>, date: NaiveDate) -> Result<Vec<DbBooking>> {
    tracing::debug!("Getting bookings for date: {}", date);

    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, name, email, booking_date, time_slot, message, created_at
        FROM bookings
        WHERE booking_date = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, name, email, booking_date, time_slot, message, created_at
        FROM bookings
        ORDER BY booking_date ASC, created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn delete_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
