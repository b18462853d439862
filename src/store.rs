//! Pool construction and table DDL for the SQLite store.

use crate::config::DatabaseConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

const TABLES_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
        restaurant_id INTEGER NOT NULL,
        pizza_id INTEGER NOT NULL,
        CONSTRAINT fk_restaurant_pizzas_restaurant_id_restaurants
            FOREIGN KEY (restaurant_id) REFERENCES restaurants (id) ON DELETE CASCADE,
        CONSTRAINT fk_restaurant_pizzas_pizza_id_pizzas
            FOREIGN KEY (pizza_id) REFERENCES pizzas (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
];

/// Children first so foreign keys never block the delete.
const CLEAR_ORDER: &[&str] = &["restaurant_pizzas", "pizzas", "restaurants"];

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a pool with foreign keys enforced on every connection. File databases are created if missing.
/// An in-memory database lives inside a single connection, so the pool is pinned to exactly one.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.url)
        .map_err(|_| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: config.url.clone(),
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_opts = if is_in_memory(&config.url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
    };
    let pool = pool_opts.connect_with(opts).await?;
    tracing::info!(url = %config.url, "database pool ready");
    Ok(pool)
}

/// Create the three tables if they do not exist yet.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLES_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Delete every row and restart the id sequences. Call within a transaction.
pub async fn clear_tables(conn: &mut SqliteConnection) -> Result<(), AppError> {
    for table in CLEAR_ORDER {
        sqlx::query(&format!("DELETE FROM \"{}\"", table))
            .execute(&mut *conn)
            .await?;
    }
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('restaurant_pizzas', 'pizzas', 'restaurants')")
        .execute(&mut *conn)
        .await?;
    Ok(())
}
