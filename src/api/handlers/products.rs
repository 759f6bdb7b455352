//! Product CRUD request handlers.
//!
//! Translates transport requests into service calls and service results into
//! transport-level outcomes. All routes here sit behind the bearer token
//! gate applied in `api::routes`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    routing::get,
};

use crate::api::doc::PRODUCT_TAG;
use crate::api::dto::{AddProductRequest, ProductResponse};
use crate::error::AppError;
use crate::repositories::StagedProducts;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Fixed message returned when a commit affects zero rows.
const SAVE_FAILED_MESSAGE: &str = "Could not save changes to Database";

/// Creates product-related routes.
///
/// Routes:
/// - GET /                - List all products
/// - POST /               - Create a new product
/// - GET /{id}            - Get product by ID
/// - GET /color/{colour}  - List products by colour
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_products).post(post_product))
        .route("/{id}", get(get_product_by_id))
        .route("/color/{colour}", get(get_products_by_colour))
}

/// GET /api/products/:id - Get product by ID
///
/// Returns the product with the specified ID or 404 if not found.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "No product with this id", body = crate::api::dto::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = PRODUCT_TAG
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .services
        .products
        .get_product(id)
        .await?
        .ok_or_else(|| AppError::not_found("product", id))?;
    Ok(Json(ProductResponse::from(product)))
}

/// GET /api/products - List all products
///
/// Returns a JSON array of all products; empty when none exist.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse])
    ),
    security(("bearerAuth" = [])),
    tag = PRODUCT_TAG
)]
pub async fn get_all_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.services.products.get_all_products().await?;
    let responses = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(responses))
}

/// GET /api/products/color/:colour - List products by colour
///
/// Case-insensitive exact match. Zero matches is still a 200 with an empty
/// array, never a 404.
#[utoipa::path(
    get,
    path = "/api/products/color/{colour}",
    params(("colour" = String, Path, description = "Colour to filter by")),
    responses(
        (status = 200, description = "Products matching the colour", body = [ProductResponse])
    ),
    security(("bearerAuth" = [])),
    tag = PRODUCT_TAG
)]
pub async fn get_products_by_colour(
    State(state): State<AppState>,
    Path(colour): Path<String>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state
        .services
        .products
        .get_products_by_colour(&colour)
        .await?;
    let responses = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(responses))
}

/// POST /api/products - Create new product
///
/// Validates the request, stages the product into this request's change set,
/// then commits it explicitly. A commit that affects zero rows is reported as
/// a failed save. On success the Location header points at the get-by-id
/// route for the new product.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = AddProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation failed or changes could not be saved", body = crate::api::dto::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = PRODUCT_TAG
)]
pub async fn post_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddProductRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ProductResponse>), AppError> {
    let mut changes = StagedProducts::new();
    state
        .services
        .products
        .add_product(&mut changes, payload.into_new_product());

    let mut committed = state.services.products.commit_changes(changes).await?;
    let Some(product) = committed.pop() else {
        return Err(AppError::BadRequest {
            message: SAVE_FAILED_MESSAGE.to_string(),
        });
    };

    let location = format!("/api/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(product)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::create_router;
    use crate::config::JwtConfig;
    use crate::models::NewProduct;
    use crate::repositories::MemoryProductStore;
    use crate::utils::jwt::generate_access_token;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, Response, StatusCode, header};
    use bigdecimal::BigDecimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use tower::ServiceExt;

    const SECRET: &str = "test_secret_key_at_least_32_characters_long";

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: SECRET.to_string(),
            access_token_expiration: 1,
        }
    }

    fn new_product(name: &str, colour: &str, price: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            colour: colour.to_string(),
            price: BigDecimal::from_str(price).unwrap(),
        }
    }

    fn seeded_app() -> Router {
        let store = Arc::new(MemoryProductStore::seeded(vec![
            new_product("Product 1", "Red", "10.00"),
            new_product("Product 2", "Blue", "20.00"),
        ]));
        create_router(crate::state::AppState::with_store(store, jwt_config()))
    }

    fn bearer_token() -> String {
        let token = generate_access_token(
            1,
            "test@example.com".to_string(),
            "testuser".to_string(),
            SECRET,
            1,
        )
        .unwrap();
        format!("Bearer {}", token)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::AUTHORIZATION, bearer_token())
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::AUTHORIZATION, bearer_token())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_product_with_valid_id_returns_product() {
        let app = seeded_app();
        let response = app.oneshot(get("/api/products/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let product = body_json(response).await;
        assert_eq!(product["id"], 1);
        assert_eq!(product["name"], "Product 1");
        assert_eq!(product["colour"], "Red");
    }

    #[tokio::test]
    async fn get_product_returns_not_found_when_product_does_not_exist() {
        let app = seeded_app();
        let response = app.oneshot(get("/api/products/999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error = body_json(response).await;
        assert_eq!(error["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn get_all_products_returns_ok_with_product_list() {
        let app = seeded_app();
        let response = app.oneshot(get("/api/products")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let products = body_json(response).await;
        assert_eq!(products.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_all_products_returns_ok_with_empty_list() {
        let store = Arc::new(MemoryProductStore::new());
        let app = create_router(crate::state::AppState::with_store(store, jwt_config()));
        let response = app.oneshot(get("/api/products")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let products = body_json(response).await;
        assert!(products.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_products_by_colour_matches_case_insensitively() {
        let app = seeded_app();
        let response = app.oneshot(get("/api/products/color/red")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let products = body_json(response).await;
        let products = products.as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["name"], "Product 1");
        assert_eq!(products[0]["colour"], "Red");
    }

    #[tokio::test]
    async fn get_products_by_colour_with_no_matches_returns_empty_list() {
        let app = seeded_app();
        let response = app
            .oneshot(get("/api/products/color/chartreuse"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let products = body_json(response).await;
        assert!(products.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn post_product_with_valid_product_returns_created() {
        let app = seeded_app();
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/products",
                r#"{"name":"New Product","colour":"Blue","price":150}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap();
        let product = body_json(response).await;
        let id = product["id"].as_i64().unwrap();
        assert_eq!(location, format!("/api/products/{}", id));
        assert_eq!(product["name"], "New Product");

        // The new product is immediately retrievable and counted.
        let response = app
            .clone()
            .oneshot(get(&format!("/api/products/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/products")).await.unwrap();
        let products = body_json(response).await;
        assert_eq!(products.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn post_product_with_empty_name_returns_validation_errors() {
        let app = seeded_app();
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/products",
                r#"{"name":"","colour":"Red","price":100}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = body_json(response).await;
        assert_eq!(error["code"], "VALIDATION_ERROR");
        assert_eq!(error["details"]["errors"][0]["field"], "name");

        // Validation happens before any store interaction.
        let response = app.oneshot(get("/api/products")).await.unwrap();
        let products = body_json(response).await;
        assert_eq!(products.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn post_product_with_missing_name_returns_bad_request() {
        let app = seeded_app();
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/products",
                r#"{"colour":"Red","price":100}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.oneshot(get("/api/products")).await.unwrap();
        let products = body_json(response).await;
        assert_eq!(products.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn request_without_token_is_unauthorized() {
        let app = seeded_app();
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/products")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn concurrent_posts_each_create_their_own_product() {
        let app = seeded_app();
        let (first, second) = tokio::join!(
            app.clone().oneshot(post_json(
                "/api/products",
                r#"{"name":"Product A","colour":"Green","price":30}"#,
            )),
            app.clone().oneshot(post_json(
                "/api/products",
                r#"{"name":"Product B","colour":"Yellow","price":40}"#,
            )),
        );
        let first = first.unwrap();
        let second = second.unwrap();

        assert_eq!(first.status(), StatusCode::CREATED);
        assert_eq!(second.status(), StatusCode::CREATED);

        // Each response reports the product that request staged, not
        // whatever another in-flight request happened to commit.
        let a = body_json(first).await;
        let b = body_json(second).await;
        assert_eq!(a["name"], "Product A");
        assert_eq!(b["name"], "Product B");
        assert_ne!(a["id"], b["id"]);

        let response = app.oneshot(get("/api/products")).await.unwrap();
        let products = body_json(response).await;
        assert_eq!(products.as_array().unwrap().len(), 4);
    }

    /// Store whose writes never take effect, for exercising the zero-rows
    /// commit outcome.
    #[derive(Debug, Default)]
    struct DroppedWriteStore;

    #[async_trait::async_trait]
    impl crate::repositories::ProductStore for DroppedWriteStore {
        async fn find_by_id(&self, _: i32) -> crate::error::AppResult<Option<crate::models::Product>> {
            Ok(None)
        }

        async fn list_all(&self) -> crate::error::AppResult<Vec<crate::models::Product>> {
            Ok(Vec::new())
        }

        async fn list_by_colour(
            &self,
            _: &str,
        ) -> crate::error::AppResult<Vec<crate::models::Product>> {
            Ok(Vec::new())
        }

        async fn commit(
            &self,
            _: StagedProducts,
        ) -> crate::error::AppResult<Vec<crate::models::Product>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn post_product_reports_save_failure_when_commit_writes_nothing() {
        let app = create_router(crate::state::AppState::with_store(
            Arc::new(DroppedWriteStore),
            jwt_config(),
        ));
        let response = app
            .oneshot(post_json(
                "/api/products",
                r#"{"name":"New Product","colour":"Blue","price":150}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = body_json(response).await;
        assert_eq!(error["code"], "BAD_REQUEST");
        assert_eq!(error["message"], "Could not save changes to Database");
    }

    #[tokio::test]
    async fn healthcheck_does_not_require_a_token() {
        let app = seeded_app();
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/healthcheck/ok")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health = body_json(response).await;
        assert_eq!(health["status"], "Healthy");
    }
}
