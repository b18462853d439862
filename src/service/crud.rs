//! Typed CRUD execution against SQLite. Every write runs in its own transaction.

use crate::error::{AppError, ValidationError};
use crate::models::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
    RestaurantPizzaExpand, RestaurantView,
};
use crate::service::validation::validate_price;
use crate::sql::{
    count, delete_by_id, delete_where, exists_by_id, insert_returning, select_all, select_by_id,
    select_where_in, Table,
};
use crate::store;
use sqlx::sqlite::SqliteRow;
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::{BTreeSet, HashMap};

/// A table row that sqlx can decode.
pub trait Record: Table + for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin {}

impl<T> Record for T where T: Table + for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin {}

pub struct CrudService;

impl CrudService {
    /// All rows of `T`, ordered by id.
    pub async fn fetch_all<T: Record>(pool: &SqlitePool) -> Result<Vec<T>, AppError> {
        let sql = select_all::<T>();
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// One row of `T` by id, or `NotFound` carrying `T::KIND`.
    pub async fn fetch_by_id<T: Record>(pool: &SqlitePool, id: i64) -> Result<T, AppError> {
        let sql = select_by_id::<T>();
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::NotFound(T::KIND))
    }

    /// Association rows of one restaurant, each paired with its pizza.
    /// The pizza is `None` only if the row points at a pizza that no longer exists.
    pub async fn fetch_restaurant_pizzas_for(
        pool: &SqlitePool,
        restaurant_id: i64,
    ) -> Result<Vec<(RestaurantPizza, Option<Pizza>)>, AppError> {
        let sql = select_where_in::<RestaurantPizza>("restaurant_id", 1);
        tracing::debug!(sql = %sql, restaurant_id, "query");
        let items = sqlx::query_as::<_, RestaurantPizza>(&sql)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await?;

        let pizza_ids: BTreeSet<i64> = items.iter().map(|rp| rp.pizza_id).collect();
        let pizzas = Self::fetch_where_id_in::<Pizza>(pool, &pizza_ids).await?;
        let by_id: HashMap<i64, Pizza> = pizzas.into_iter().map(|p| (p.id, p)).collect();

        Ok(items
            .into_iter()
            .map(|rp| {
                let pizza = by_id.get(&rp.pizza_id).cloned();
                (rp, pizza)
            })
            .collect())
    }

    /// Restaurant with its association rows, each expanding its pizza.
    pub async fn restaurant_detail(pool: &SqlitePool, id: i64) -> Result<RestaurantView, AppError> {
        let restaurant = Self::fetch_by_id::<Restaurant>(pool, id).await?;
        let items = Self::fetch_restaurant_pizzas_for(pool, id).await?;
        let views = items
            .iter()
            .map(|(rp, pizza)| {
                rp.to_view(RestaurantPizzaExpand {
                    pizza: pizza.as_ref(),
                    restaurant: None,
                })
            })
            .collect();
        Ok(restaurant.to_detail_view(views))
    }

    pub async fn create_restaurant(
        pool: &SqlitePool,
        input: &NewRestaurant,
    ) -> Result<Restaurant, AppError> {
        let sql = insert_returning::<Restaurant>();
        tracing::debug!(sql = %sql, "query (tx)");
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(restaurant_id = row.id, "restaurant created");
        Ok(row)
    }

    pub async fn create_pizza(pool: &SqlitePool, input: &NewPizza) -> Result<Pizza, AppError> {
        let sql = insert_returning::<Pizza>();
        tracing::debug!(sql = %sql, "query (tx)");
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, Pizza>(&sql)
            .bind(&input.name)
            .bind(&input.ingredients)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(pizza_id = row.id, "pizza created");
        Ok(row)
    }

    /// Validate the price and both references, then insert. Nothing is written on failure.
    /// Returns the new row together with the parent rows read inside the same transaction.
    pub async fn create_restaurant_pizza(
        pool: &SqlitePool,
        input: &NewRestaurantPizza,
    ) -> Result<(RestaurantPizza, Restaurant, Pizza), AppError> {
        let price = validate_price(Some(input.price))?;

        let mut tx = pool.begin().await?;
        let restaurant = Self::fetch_optional::<Restaurant>(&mut tx, input.restaurant_id)
            .await?
            .ok_or(ValidationError::UnknownReference {
                field: "restaurant_id",
                id: input.restaurant_id,
            })?;
        let pizza = Self::fetch_optional::<Pizza>(&mut tx, input.pizza_id)
            .await?
            .ok_or(ValidationError::UnknownReference {
                field: "pizza_id",
                id: input.pizza_id,
            })?;

        let sql = insert_returning::<RestaurantPizza>();
        tracing::debug!(sql = %sql, "query (tx)");
        let row = sqlx::query_as::<_, RestaurantPizza>(&sql)
            .bind(price)
            .bind(input.restaurant_id)
            .bind(input.pizza_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(
            restaurant_pizza_id = row.id,
            restaurant_id = row.restaurant_id,
            pizza_id = row.pizza_id,
            price = row.price,
            "restaurant pizza created"
        );
        Ok((row, restaurant, pizza))
    }

    /// Delete a restaurant and every association row that references it.
    /// Returns the number of association rows removed.
    pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let mut tx = pool.begin().await?;
        if !Self::exists::<Restaurant>(&mut tx, id).await? {
            return Err(AppError::NotFound(Restaurant::KIND));
        }

        let sql = delete_where::<RestaurantPizza>("restaurant_id");
        tracing::debug!(sql = %sql, id, "query (tx)");
        let removed = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let sql = delete_by_id::<Restaurant>();
        tracing::debug!(sql = %sql, id, "query (tx)");
        sqlx::query(&sql).bind(id).execute(&mut *tx).await?;

        tx.commit().await?;
        tracing::info!(restaurant_id = id, removed_associations = removed, "restaurant deleted");
        Ok(removed)
    }

    pub async fn count<T: Record>(pool: &SqlitePool) -> Result<i64, AppError> {
        let sql = count::<T>();
        let n: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
        Ok(n)
    }

    /// Remove every row from the three tables and restart id sequences.
    pub async fn reset(pool: &SqlitePool) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        store::clear_tables(&mut tx).await?;
        tx.commit().await?;
        tracing::info!("all tables cleared");
        Ok(())
    }

    async fn fetch_optional<T: Record>(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<T>, AppError> {
        let sql = select_by_id::<T>();
        tracing::debug!(sql = %sql, id, "query (tx)");
        Ok(sqlx::query_as::<_, T>(&sql).bind(id).fetch_optional(&mut *conn).await?)
    }

    async fn exists<T: Record>(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
        let sql = exists_by_id::<T>();
        tracing::debug!(sql = %sql, id, "query (tx)");
        let found: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(&mut *conn).await?;
        Ok(found != 0)
    }

    async fn fetch_where_id_in<T: Record>(
        pool: &SqlitePool,
        ids: &BTreeSet<i64>,
    ) -> Result<Vec<T>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = select_where_in::<T>(T::primary_key(), ids.len());
        tracing::debug!(sql = %sql, ids = ?ids, "query");
        let mut query = sqlx::query_as::<_, T>(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        Ok(query.fetch_all(pool).await?)
    }
}
