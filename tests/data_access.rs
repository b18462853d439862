use pizza_api::error::{AppError, ValidationError};
use pizza_api::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza, RestaurantPizzaExpand};
use pizza_api::CrudService;
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn end_to_end_create_and_expand() {
    let pool = test_pool().await;

    let restaurant = add_restaurant(&pool, "Dragon Pizza", "123 Main St").await;
    assert_eq!(restaurant.id, 1);
    let pizza = add_pizza(&pool, "Cheese", "Dough, Tomato Sauce, Cheese").await;
    assert_eq!(pizza.id, 1);

    let input = NewRestaurantPizza {
        price: 15,
        restaurant_id: restaurant.id,
        pizza_id: pizza.id,
    };
    let (rp, parent_restaurant, parent_pizza) =
        CrudService::create_restaurant_pizza(&pool, &input).await.unwrap();
    assert_eq!(rp.id, 1);
    assert_eq!(parent_restaurant, restaurant);
    assert_eq!(parent_pizza, pizza);

    let view = rp.to_view(RestaurantPizzaExpand::both(&parent_pizza, &parent_restaurant));
    let value = serde_json::to_value(view).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "price": 15,
            "pizza_id": 1,
            "restaurant_id": 1,
            "pizza": { "id": 1, "name": "Cheese", "ingredients": "Dough, Tomato Sauce, Cheese" },
            "restaurant": { "id": 1, "name": "Dragon Pizza", "address": "123 Main St" }
        })
    );

    let rejected = NewRestaurantPizza {
        price: 35,
        restaurant_id: 1,
        pizza_id: 1,
    };
    let err = CrudService::create_restaurant_pizza(&pool, &rejected)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::OutOfRange { value: 35, .. })
    ));
    assert_eq!(association_count(&pool).await, 1);
}

#[tokio::test]
async fn price_accepted_only_inside_range() {
    let pool = test_pool().await;
    let restaurant = add_restaurant(&pool, "Sanjay's Pizza", "address2").await;
    let pizza = add_pizza(&pool, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await;

    for price in [0, -5, 31, 100] {
        let input = NewRestaurantPizza {
            price,
            restaurant_id: restaurant.id,
            pizza_id: pizza.id,
        };
        let err = CrudService::create_restaurant_pizza(&pool, &input)
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::Validation(ValidationError::OutOfRange { .. })),
            "price {price} should be out of range, got {err:?}"
        );
    }
    assert_eq!(association_count(&pool).await, 0);

    for price in [1, 15, 30] {
        add_price(&pool, &restaurant, &pizza, price).await;
    }
    assert_eq!(association_count(&pool).await, 3);
}

#[tokio::test]
async fn duplicate_pairs_are_allowed() {
    let pool = test_pool().await;
    let restaurant = add_restaurant(&pool, "Kiki's Pizza", "address3").await;
    let pizza = add_pizza(&pool, "Melanie", "Dough, Sauce, Ricotta").await;

    let first = add_price(&pool, &restaurant, &pizza, 5).await;
    let second = add_price(&pool, &restaurant, &pizza, 7).await;
    assert_ne!(first.id, second.id);
    assert_eq!(association_count(&pool).await, 2);
}

#[tokio::test]
async fn unknown_references_are_rejected_without_writing() {
    let pool = test_pool().await;
    let restaurant = add_restaurant(&pool, "Dragon Pizza", "123 Main St").await;
    let pizza = add_pizza(&pool, "Cheese", "Dough, Tomato Sauce, Cheese").await;

    let missing_restaurant = NewRestaurantPizza {
        price: 10,
        restaurant_id: 99,
        pizza_id: pizza.id,
    };
    let err = CrudService::create_restaurant_pizza(&pool, &missing_restaurant)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::UnknownReference {
            field: "restaurant_id",
            id: 99
        })
    ));

    let missing_pizza = NewRestaurantPizza {
        price: 10,
        restaurant_id: restaurant.id,
        pizza_id: 42,
    };
    let err = CrudService::create_restaurant_pizza(&pool, &missing_pizza)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::UnknownReference {
            field: "pizza_id",
            id: 42
        })
    ));

    assert_eq!(association_count(&pool).await, 0);
}

#[tokio::test]
async fn fetch_by_id_distinguishes_not_found() {
    let pool = test_pool().await;
    let err = CrudService::fetch_by_id::<Restaurant>(&pool, 7).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Restaurant")));

    let err = CrudService::restaurant_detail(&pool, 7).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Restaurant")));

    let created = add_restaurant(&pool, "Dragon Pizza", "123 Main St").await;
    let found = CrudService::fetch_by_id::<Restaurant>(&pool, created.id).await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn fetch_all_returns_rows_in_id_order() {
    let pool = test_pool().await;
    add_pizza(&pool, "Emma", "Dough, Tomato Sauce, Cheese").await;
    add_pizza(&pool, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await;

    let pizzas = CrudService::fetch_all::<Pizza>(&pool).await.unwrap();
    let names: Vec<&str> = pizzas.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Emma", "Geri"]);

    assert!(CrudService::fetch_all::<Restaurant>(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn detail_view_lists_each_association_with_its_pizza() {
    let pool = test_pool().await;
    let dragon = add_restaurant(&pool, "Dragon Pizza", "123 Main St").await;
    let other = add_restaurant(&pool, "Kiki's Pizza", "address3").await;
    let cheese = add_pizza(&pool, "Cheese", "Dough, Tomato Sauce, Cheese").await;
    let pepperoni = add_pizza(&pool, "Pepperoni", "Dough, Tomato Sauce, Cheese, Pepperoni").await;

    add_price(&pool, &dragon, &cheese, 10).await;
    add_price(&pool, &dragon, &pepperoni, 12).await;
    add_price(&pool, &other, &cheese, 9).await;

    let flat = serde_json::to_value(dragon.to_view()).unwrap();
    assert_eq!(flat.as_object().unwrap().len(), 3);

    let detail = CrudService::restaurant_detail(&pool, dragon.id).await.unwrap();
    let items = detail.restaurant_pizzas.as_ref().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].pizza.as_ref().unwrap().name, "Cheese");
    assert_eq!(items[1].pizza.as_ref().unwrap().name, "Pepperoni");
    assert!(items.iter().all(|rp| rp.restaurant.is_none()));
}

#[tokio::test]
async fn delete_restaurant_cascades_its_associations() {
    let pool = test_pool().await;
    let doomed = add_restaurant(&pool, "Dragon Pizza", "123 Main St").await;
    let kept = add_restaurant(&pool, "Kiki's Pizza", "address3").await;
    let pizza = add_pizza(&pool, "Cheese", "Dough, Tomato Sauce, Cheese").await;

    for price in [5, 10, 15] {
        add_price(&pool, &doomed, &pizza, price).await;
    }
    add_price(&pool, &kept, &pizza, 20).await;
    assert_eq!(association_count(&pool).await, 4);

    let removed = CrudService::delete_restaurant(&pool, doomed.id).await.unwrap();
    assert_eq!(removed, 3);
    assert_eq!(association_count(&pool).await, 1);
    assert_eq!(CrudService::count::<Restaurant>(&pool).await.unwrap(), 1);

    let remaining = CrudService::fetch_all::<RestaurantPizza>(&pool).await.unwrap();
    assert!(remaining.iter().all(|rp| rp.restaurant_id == kept.id));

    let err = CrudService::delete_restaurant(&pool, doomed.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Restaurant")));
    assert_eq!(association_count(&pool).await, 1);
}

#[tokio::test]
async fn reset_clears_rows_and_restarts_ids() {
    let pool = test_pool().await;
    let restaurant = add_restaurant(&pool, "Dragon Pizza", "123 Main St").await;
    let pizza = add_pizza(&pool, "Cheese", "Dough, Tomato Sauce, Cheese").await;
    add_price(&pool, &restaurant, &pizza, 15).await;

    CrudService::reset(&pool).await.unwrap();
    assert_eq!(association_count(&pool).await, 0);
    assert_eq!(CrudService::count::<Pizza>(&pool).await.unwrap(), 0);
    assert_eq!(CrudService::count::<Restaurant>(&pool).await.unwrap(), 0);

    let again = add_restaurant(&pool, "Dragon Pizza", "123 Main St").await;
    assert_eq!(again.id, 1);
}
