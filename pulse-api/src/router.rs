use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

pub fn create(config: Settings) -> Router<()> {
    create_with_state(config, AppState::from_env())
}

pub fn create_with_state(config: Settings, app_state: AppState) -> Router<()> {
    let app = Router::new()
        .route("/", get(routes::page::index))
        .route("/api/activities", get(routes::activities::activity_hours))
        .route(
            "/api/githubContributions",
            get(routes::contributions::github_contributions),
        )
        .route("/api/heatmap", get(routes::heatmap::get_heatmap));

    let app_url = config.application.app_url.clone();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(["content-type".parse().unwrap(), "authorization".parse().unwrap()])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
