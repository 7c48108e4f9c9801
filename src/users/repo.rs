use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::users::dto::{PublicUser, UserPatch, UserWrite};

impl PublicUser {
    pub async fn insert(db: &PgPool, user: &UserWrite) -> sqlx::Result<PublicUser> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_digest)
        .fetch_one(db)
        .await
    }

    pub async fn get(db: &PgPool, id: i64) -> sqlx::Result<Option<PublicUser>> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> sqlx::Result<Vec<PublicUser>> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    /// Full replace: every mutable column is overwritten in one statement.
    pub async fn replace(
        db: &PgPool,
        id: i64,
        user: &UserWrite,
    ) -> sqlx::Result<Option<PublicUser>> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            UPDATE users
            SET name = $1, email = $2, password = $3
            WHERE id = $4
            RETURNING id, name, email
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_digest)
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Partial update. The SET clause is assembled column by column from the
    /// validated patch; values only ever enter the statement as binds.
    pub async fn patch(
        db: &PgPool,
        id: i64,
        patch: &UserPatch,
    ) -> sqlx::Result<Option<PublicUser>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(name) = &patch.name {
                set.push("name = ").push_bind_unseparated(name);
            }
            if let Some(email) = &patch.email {
                set.push("email = ").push_bind_unseparated(email);
            }
            if let Some(digest) = &patch.password_digest {
                set.push("password = ").push_bind_unseparated(digest);
            }
        }
        qb.push(" WHERE id = ")
            .push_bind(id)
            .push(" RETURNING id, name, email");

        qb.build_query_as::<PublicUser>().fetch_optional(db).await
    }

    pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<Option<PublicUser>> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }
}
