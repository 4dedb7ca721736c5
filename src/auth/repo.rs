use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo_types::User;

impl User {
    /// Exact-match lookup used by login.
    pub async fn find_by_username(db: &PgPool, username: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, date_joined
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    /// Case-insensitive username check used by the signup duplicate guard.
    pub async fn username_taken(db: &PgPool, username: &str) -> sqlx::Result<bool> {
        let existing = sqlx::query_scalar::<_, Uuid>(
            r#"SELECT id FROM users WHERE LOWER(username) = LOWER($1)"#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(existing.is_some())
    }

    /// Case-insensitive email check used by the signup duplicate guard.
    pub async fn email_taken(db: &PgPool, email: &str) -> sqlx::Result<bool> {
        let existing =
            sqlx::query_scalar::<_, Uuid>(r#"SELECT id FROM users WHERE LOWER(email) = LOWER($1)"#)
                .bind(email)
                .fetch_optional(db)
                .await?;
        Ok(existing.is_some())
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, date_joined
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with an already-hashed password.
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, date_joined
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}

// Database tests: run with `cargo test -- --ignored` against a Postgres
// pointed to by DATABASE_URL.
#[cfg(test)]
mod db_tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for db tests");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("connect to database");
        sqlx::migrate!("./migrations").run(&pool).await.expect("run migrations");
        pool
    }

    async fn remove_user(db: &PgPool, id: Uuid) {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .expect("cleanup user");
    }

    #[tokio::test]
    #[ignore]
    async fn username_and_email_checks_are_case_insensitive() {
        let db = test_pool().await;
        let suffix = Uuid::new_v4().simple().to_string();
        let username = format!("CasedUser{suffix}");
        let email = format!("Cased{suffix}@Example.com");

        let user = User::create(&db, &username, &email, "hash").await.expect("create user");

        assert!(User::username_taken(&db, &username.to_lowercase()).await.unwrap());
        assert!(User::username_taken(&db, &username.to_uppercase()).await.unwrap());
        assert!(User::email_taken(&db, &email.to_lowercase()).await.unwrap());
        assert!(!User::username_taken(&db, &format!("other{suffix}")).await.unwrap());

        remove_user(&db, user.id).await;
    }
}
