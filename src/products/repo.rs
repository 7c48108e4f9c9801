use sqlx::PgPool;

use crate::products::dto::{NewProduct, Product};

impl Product {
    pub async fn insert(db: &PgPool, product: &NewProduct) -> sqlx::Result<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, about, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, about, price
            "#,
        )
        .bind(&product.name)
        .bind(&product.about)
        .bind(product.price)
        .fetch_one(db)
        .await
    }

    pub async fn get(db: &PgPool, id: i64) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, about, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> sqlx::Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, about, price
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            DELETE FROM products
            WHERE id = $1
            RETURNING id, name, about, price
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }
}
