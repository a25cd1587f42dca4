//! HTTP server assembly: shared state, routes, and the listen loop.

use actix_web::{middleware, web, App, HttpServer};

use shrinkray_core::{BatchProcessor, Config, Packager};

use crate::handlers;

/// Per-process state shared by all requests.
pub struct AppState {
    /// The batch pipeline
    pub processor: BatchProcessor,

    /// Deliverable encoder/packager
    pub packager: Packager,

    /// Width applied when a request omits `new_width`
    pub default_width: u32,
}

impl AppState {
    /// Build the pipeline components from configuration.
    pub fn new(config: &Config) -> shrinkray_core::Result<Self> {
        Ok(Self {
            processor: BatchProcessor::new(config)?,
            packager: Packager::new(&config.encoding),
            default_width: config.batch.default_width,
        })
    }
}

/// Route table, shared between the binary and integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/resize_batch", web::post().to(handlers::resize_batch));
}

/// Bind and serve until shutdown.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = web::Data::new(AppState::new(&config)?);
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!("Listening on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    tracing::info!("Shrinkray shutting down");
    Ok(())
}
