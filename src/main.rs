use axum::{
    Router,
    routing::{get, post},
};
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portkey_planner::handlers::plan_handlers::{
    AppState, ErrorResponse, convert_currency_handler, generate_plan_handler,
};
use portkey_planner::models::itinerary::{Activity, DayPlan, TimeOfDay};
use portkey_planner::models::trip::{
    ConvertCurrencyRequest, ConvertCurrencyResponse, PlanResult, TripRequest,
};
use portkey_planner::services::currency_service::StaticCurrencyService;
use portkey_planner::services::planner_service::PlannerServiceImpl;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        portkey_planner::handlers::plan_handlers::generate_plan_handler,
        portkey_planner::handlers::plan_handlers::convert_currency_handler,
    ),
    components(
        schemas(
            TripRequest,
            PlanResult,
            DayPlan,
            Activity,
            TimeOfDay,
            ConvertCurrencyRequest,
            ConvertCurrencyResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "planner", description = "Trip plan generation endpoints"),
        (name = "currency", description = "Currency conversion endpoints")
    ),
    info(
        title = "Portkey Planner API",
        version = "0.1.0",
        description = "REST API for travel budget allocation and itinerary planning",
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Initialize services
    let state = AppState {
        planner_service: Arc::new(PlannerServiceImpl),
        currency_service: Arc::new(StaticCurrencyService),
    };

    // Build router with routes
    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Planner routes
        .route("/api/generate_plan", post(generate_plan_handler))
        .route("/api/convert_currency", post(convert_currency_handler))
        // Add services to state
        .with_state(state)
        // Merge Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        // Add CORS middleware
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("✓ Server running on http://{}", addr);
    println!("  - Health check: http://{}/health", addr);
    println!("  - Generate plan: POST http://{}/api/generate_plan", addr);
    println!("  - Convert currency: POST http://{}/api/convert_currency", addr);
    println!("  - API Docs: http://{}/api/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
