// src/main.rs
use actix_web::{App, HttpServer, middleware, web};
use log::{info, warn};
use std::sync::Arc;

mod errors;
mod handlers;
mod models;
mod pipeline;
mod prompts;
mod services;
mod styles;

use crate::handlers::{generate_assets, health_check};
use crate::services::{ImageProcessor, ModelApi, OpenAiService};

#[derive(Clone)]
pub struct AppState {
    model: Arc<dyn ModelApi>,
    image_processor: Arc<ImageProcessor>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting assetgen service...");

    let api_key = std::env::var("OPENAI_API_KEY").ok();
    if api_key.is_none() {
        // Startup keeps going; the generate endpoint rejects requests
        // until the key is configured.
        warn!("OPENAI_API_KEY is not set. Set it in Railway Variables (or .env.local for local dev).");
    }

    let model: Arc<dyn ModelApi> = Arc::new(OpenAiService::new(api_key));
    let image_processor = Arc::new(ImageProcessor::new());

    let app_state = AppState {
        model,
        image_processor,
    };

    info!("Starting HTTP server on 0.0.0.0:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .service(web::scope("/api/v1").route("/generate", web::post().to(generate_assets)))
            .route("/health", web::get().to(health_check))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
