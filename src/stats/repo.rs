use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Per-user total produced by the leaderboard aggregate. Users without
/// submissions appear with a zero total.
#[derive(Debug, Clone, FromRow)]
pub struct UserTotal {
    pub user_id: Uuid,
    pub username: String,
    pub total_weight: Decimal,
}

/// Sum of a single user's submitted weight, zero when they have none.
pub async fn total_weight_for_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Decimal> {
    sqlx::query_scalar::<_, Decimal>(
        r#"
        SELECT COALESCE(SUM(weight_kg), 0)
        FROM waste_submissions
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await
}

/// One aggregate row per registered user.
pub async fn totals_for_all_users(db: &PgPool) -> sqlx::Result<Vec<UserTotal>> {
    sqlx::query_as::<_, UserTotal>(
        r#"
        SELECT u.id AS user_id, u.username, COALESCE(SUM(s.weight_kg), 0) AS total_weight
        FROM users u
        LEFT JOIN waste_submissions s ON s.user_id = u.id
        GROUP BY u.id, u.username
        "#,
    )
    .fetch_all(db)
    .await
}
