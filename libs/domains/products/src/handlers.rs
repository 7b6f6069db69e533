//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppJson,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductRequest};
use crate::service::ProductUseCases;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductRequest),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<S: ProductUseCases + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products::<S>).post(create_product::<S>))
        .route(
            "/{sku}",
            get(get_product::<S>)
                .put(update_product::<S>)
                .delete(delete_product::<S>),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products ordered by SKU", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: ProductUseCases>(
    State(service): State<Arc<S>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.find_all().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: ProductUseCases>(
    State(service): State<Arc<S>>,
    AppJson(input): AppJson<ProductRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(Product::try_from(input)?).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by SKU
#[utoipa::path(
    get,
    path = "/{sku}",
    tag = "Products",
    params(
        ("sku" = String, Path, description = "Product SKU", example = "FAL-1000000")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: ProductUseCases>(
    State(service): State<Arc<S>>,
    Path(sku): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.find_by_sku(&sku).await?;
    Ok(Json(product))
}

/// Replace a product
///
/// The body is a complete product; its SKU may differ from the one in the path.
/// Sending the stored values back unchanged performs no write.
#[utoipa::path(
    put,
    path = "/{sku}",
    tag = "Products",
    params(
        ("sku" = String, Path, description = "Current product SKU", example = "FAL-1000000")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<S: ProductUseCases>(
    State(service): State<Arc<S>>,
    Path(sku): Path<String>,
    AppJson(input): AppJson<ProductRequest>,
) -> ProductResult<Json<Product>> {
    let candidate = Product::try_from(input)?;
    let product = service.update_product(&sku, candidate).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{sku}",
    tag = "Products",
    params(
        ("sku" = String, Path, description = "Product SKU", example = "FAL-1000000")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<S: ProductUseCases>(
    State(service): State<Arc<S>>,
    Path(sku): Path<String>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(&sku).await?;
    Ok(StatusCode::NO_CONTENT)
}
