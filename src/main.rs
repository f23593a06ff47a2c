use actix_web::{
    error, middleware, web, App, HttpRequest, HttpResponse, HttpServer, ResponseError,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
mod blog;
mod blogs;
mod links;
mod settings;
mod telemetry;
use settings::Settings;

#[derive(Deserialize, Serialize)]
struct ApiError {
    message: String,
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    use actix_web::error::JsonPayloadError;

    let detail = err.to_string();
    let resp = match &err {
        JsonPayloadError::ContentType => HttpResponse::UnsupportedMediaType().body(detail),
        _ => HttpResponse::build(err.status_code()).json(ApiError { message: detail }),
    };
    error::InternalError::from_response(err, resp).into()
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blogs::list_blogs)
        .service(blogs::create_blog)
        .service(blogs::get_blog)
        .app_data(
            web::JsonConfig::default()
                // register error_handler for JSON extractors.
                .error_handler(json_error_handler),
        );
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry("info")?;
    let settings = Settings::load().context("Failed to load the configuration")?;

    let address = settings.server.address();
    let server_settings = web::Data::new(settings.server);
    tracing::info!("Starting to listen for incoming requests at {}", address);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(server_settings.clone())
            .configure(configure)
    })
    .bind(address)
    .with_context(|| format!("Failed to bind the server to {address}"))?
    .run()
    .await?;
    Ok(())
}
