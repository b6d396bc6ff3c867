use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use staff_service::{
    api::{
        handler::{export, staff},
        state::AppState,
    },
    infrastructure::staff::PgStaffStore,
    responses::HeadpatResponse,
    shutdown, telemetry,
};
use std::{env, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        staff::list,
        staff::details,
        staff::create_form,
        staff::create,
        staff::edit_form,
        staff::edit,
        staff::delete_form,
        staff::delete_confirmed,
        export::export,
    ),
    tags(
        (name = "Staffs", description = "Staff record management and export"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    telemetry::init_telemetry();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let port = env::var("SERVER_PORT").unwrap_or_else(|_| "8080".to_string());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to establish connection into Postgres");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let state = Arc::new(AppState {
        staff_store: Arc::new(PgStaffStore::new(pool)),
    });

    let app = Router::new()
        .route(
            "/headpat",
            get(|| async {
                axum::Json(HeadpatResponse {
                    message: "staff-service is alive and well",
                })
            }),
        )
        // Staff routes, MVC-style paths
        .route("/Staffs", get(staff::list))
        .route("/Staffs/Details/{id}", get(staff::details))
        .route(
            "/Staffs/Create",
            get(staff::create_form).post(staff::create),
        )
        .route("/Staffs/Edit/{id}", get(staff::edit_form).post(staff::edit))
        .route(
            "/Staffs/Delete/{id}",
            get(staff::delete_form).post(staff::delete_confirmed),
        )
        .route("/Staffs/Export", get(export::export))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // tracing log (turn request into info level)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(tower_http::LatencyUnit::Millis),
                ),
        )
        .with_state(state);

    tracing::info!("staff-service listening on 0.0.0.0:{port}");

    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .expect("Server crashed");

    tracing::info!("staff-service shut down");
}
