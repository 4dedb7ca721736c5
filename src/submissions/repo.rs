use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Waste submission row. `created_at` is set on insert and never updated;
/// ownership (`user_id`) is fixed at creation.
#[derive(Debug, Clone, FromRow)]
pub struct WasteSubmission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub waste_type: String,
    pub weight_kg: Decimal,
    pub created_at: OffsetDateTime,
}

/// All submissions owned by a user, ascending by creation time with id as a
/// deterministic secondary key.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<WasteSubmission>> {
    sqlx::query_as::<_, WasteSubmission>(
        r#"
        SELECT id, user_id, waste_type, weight_kg, created_at
        FROM waste_submissions
        WHERE user_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    waste_type: &str,
    weight_kg: Decimal,
) -> sqlx::Result<WasteSubmission> {
    sqlx::query_as::<_, WasteSubmission>(
        r#"
        INSERT INTO waste_submissions (user_id, waste_type, weight_kg)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, waste_type, weight_kg, created_at
        "#,
    )
    .bind(user_id)
    .bind(waste_type)
    .bind(weight_kg)
    .fetch_one(db)
    .await
}

/// Fetch one submission, owner filter included so other users' rows read as
/// absent.
pub async fn get_owned(
    db: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> sqlx::Result<Option<WasteSubmission>> {
    sqlx::query_as::<_, WasteSubmission>(
        r#"
        SELECT id, user_id, waste_type, weight_kg, created_at
        FROM waste_submissions
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await
}

/// Update category and weight; `created_at` stays untouched. Returns `None`
/// when the row is missing or owned by somebody else.
pub async fn update_owned(
    db: &PgPool,
    user_id: Uuid,
    id: Uuid,
    waste_type: &str,
    weight_kg: Decimal,
) -> sqlx::Result<Option<WasteSubmission>> {
    sqlx::query_as::<_, WasteSubmission>(
        r#"
        UPDATE waste_submissions
        SET waste_type = $3, weight_kg = $4
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, waste_type, weight_kg, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(waste_type)
    .bind(weight_kg)
    .fetch_optional(db)
    .await
}

/// Returns `false` when nothing was deleted (missing or other-owned row).
pub async fn delete_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM waste_submissions
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
