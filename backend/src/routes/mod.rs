//! Route definitions for the Inventory Management API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{self, crud},
    middleware::auth_middleware,
    models::{Item, Purchase, Store, StoreStock, Warehouse, WarehouseStock},
    repository::Entity,
    AppState,
};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Login (public token exchange, protected test route)
        .nest("/login", login_routes(state.clone()))
        // Users
        .nest("/users", user_routes(state))
        // Inventory (public)
        .nest("/items", crud_routes::<Item>())
        .nest("/warehouses", crud_routes::<Warehouse>())
        .nest("/stores", crud_routes::<Store>())
        .nest("/purchases", purchase_routes())
        .nest("/warehouseitems", stock_routes::<WarehouseStock>())
        .nest("/storeitems", stock_routes::<StoreStock>())
}

/// list/create on `/`, get/update/delete on `/:id`
fn crud_routes<E>() -> Router<AppState>
where
    E: Entity + serde::Serialize,
    E::New: serde::de::DeserializeOwned + validator::Validate,
    E::Update: serde::de::DeserializeOwned + validator::Validate,
{
    Router::new()
        .route("/", get(crud::list::<E>).post(crud::create::<E>))
        .route(
            "/:id",
            get(crud::get::<E>)
                .put(crud::update::<E>)
                .delete(crud::delete::<E>),
        )
}

fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud::list::<Purchase>).post(handlers::create_purchase),
        )
        .route(
            "/:id",
            get(crud::get::<Purchase>)
                .put(crud::update::<Purchase>)
                .delete(crud::delete::<Purchase>),
        )
}

/// `GET /:id` lists a container's rows; `PUT|DELETE /:id` address one stock row
fn stock_routes<S>() -> Router<AppState>
where
    S: crate::models::StockLine + serde::Serialize,
    S::New: serde::de::DeserializeOwned + validator::Validate,
    S::Update: serde::de::DeserializeOwned + validator::Validate,
{
    Router::new().route("/", post(handlers::add_stock::<S>)).route(
        "/:id",
        get(handlers::list_stock::<S>)
            .put(crud::update::<S>)
            .delete(crud::delete::<S>),
    )
}

fn login_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/access-token", post(handlers::login_access_token))
        .route(
            "/test-token",
            post(handlers::test_token)
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}

/// User routes; `/signup` is public, the rest require a bearer token
fn user_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/me",
            get(handlers::read_me)
                .patch(handlers::update_me)
                .delete(handlers::delete_me),
        )
        .route("/me/password", axum::routing::patch(handlers::update_password))
        .route(
            "/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/signup", post(handlers::signup))
        .merge(protected)
}
