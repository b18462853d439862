//! Seed tool: clears every table, then inserts demo restaurants, pizzas and prices.
//!
//! Run from repo root: `cargo run -p pizza-seed`

use pizza_api::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use pizza_api::{connect, ensure_tables, AppConfig, CrudService};

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const PRICES: &[(usize, usize, i64)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pizza_api=info,pizza_seed=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect(&config.database).await?;
    ensure_tables(&pool).await?;
    CrudService::reset(&pool).await?;

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let input = NewRestaurant {
            name: name.to_string(),
            address: address.to_string(),
        };
        restaurants.push(CrudService::create_restaurant(&pool, &input).await?);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let input = NewPizza {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
        };
        pizzas.push(CrudService::create_pizza(&pool, &input).await?);
    }

    for &(r, p, price) in PRICES {
        let input = NewRestaurantPizza {
            price,
            restaurant_id: restaurants[r].id,
            pizza_id: pizzas[p].id,
        };
        CrudService::create_restaurant_pizza(&pool, &input).await?;
    }

    tracing::info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        restaurant_pizzas = PRICES.len(),
        "seeding complete"
    );
    Ok(())
}
