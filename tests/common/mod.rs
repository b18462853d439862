#![allow(dead_code)]

use pizza_api::models::{NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use pizza_api::{connect, ensure_tables, CrudService, DatabaseConfig};
use sqlx::SqlitePool;

/// Fresh in-memory store with the tables created.
pub async fn test_pool() -> SqlitePool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
    };
    let pool = connect(&config).await.expect("in-memory pool");
    ensure_tables(&pool).await.expect("create tables");
    pool
}

pub async fn add_restaurant(pool: &SqlitePool, name: &str, address: &str) -> Restaurant {
    let input = NewRestaurant {
        name: name.into(),
        address: address.into(),
    };
    CrudService::create_restaurant(pool, &input)
        .await
        .expect("create restaurant")
}

pub async fn add_pizza(pool: &SqlitePool, name: &str, ingredients: &str) -> Pizza {
    let input = NewPizza {
        name: name.into(),
        ingredients: ingredients.into(),
    };
    CrudService::create_pizza(pool, &input).await.expect("create pizza")
}

pub async fn add_price(
    pool: &SqlitePool,
    restaurant: &Restaurant,
    pizza: &Pizza,
    price: i64,
) -> RestaurantPizza {
    let input = NewRestaurantPizza {
        price,
        restaurant_id: restaurant.id,
        pizza_id: pizza.id,
    };
    let (row, _, _) = CrudService::create_restaurant_pizza(pool, &input)
        .await
        .expect("create restaurant pizza");
    row
}

pub async fn association_count(pool: &SqlitePool) -> i64 {
    CrudService::count::<RestaurantPizza>(pool)
        .await
        .expect("count restaurant pizzas")
}
