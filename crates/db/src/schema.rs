use chrono::NaiveDate;
use eyre::{Result, WrapErr, eyre};
use sqlx::{Pool, Postgres};
use tracing::info;

/// Creates the bookings table and its indexes.
///
/// `unique_slots` adds a unique index on `(booking_date, time_slot)` so the
/// database rejects a second booking of the same slot; without it the index
/// is dropped again and duplicate bookings are stored as submitted.
pub async fn initialize_database(pool: &Pool<Postgres>, unique_slots: bool) -> Result<()> {
    info!("Initializing database schema...");

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(320) NOT NULL,
            booking_date DATE NOT NULL,
            time_slot VARCHAR(16) NOT NULL,
            message TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_booking_date ON bookings(booking_date);
        "#,
    )
    .execute(pool)
    .await?;

    if unique_slots {
        let duplicates: Vec<(NaiveDate, String, i64)> = sqlx::query_as(
            r#"
            SELECT booking_date, time_slot, COUNT(*)
            FROM bookings
            GROUP BY booking_date, time_slot
            HAVING COUNT(*) > 1
            ORDER BY booking_date, time_slot
            "#,
        )
        .fetch_all(pool)
        .await
        .wrap_err("Failed to check for double-booked slots")?;

        if !duplicates.is_empty() {
            return Err(eyre!(duplicate_slots_report(&duplicates)));
        }

        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS uq_bookings_date_slot
            ON bookings(booking_date, time_slot);
            "#,
        )
        .execute(pool)
        .await
        .wrap_err("Failed to create the unique (booking_date, time_slot) index")?;
    } else {
        sqlx::query("DROP INDEX IF EXISTS uq_bookings_date_slot;")
            .execute(pool)
            .await?;
    }

    info!("Database schema initialized successfully (unique slots: {}).", unique_slots);
    Ok(())
}

/// Explains why the unique slot index cannot be created.
fn duplicate_slots_report(duplicates: &[(NaiveDate, String, i64)]) -> String {
    let slots: Vec<String> = duplicates
        .iter()
        .map(|(date, slot, count)| format!("{} {} ({} bookings)", date, slot, count))
        .collect();

    format!(
        "BOOKING_REJECT_DOUBLE is on but these slots are already double-booked: {}. \
         Delete the extra bookings (DELETE /api/bookings/:id) or start once with \
         BOOKING_REJECT_DOUBLE=false.",
        slots.join(", ")
    )
}
