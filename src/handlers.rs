use actix_web::web::{Data, Json, Path};
use actix_web::{HttpResponse, Responder, mime};

use crate::config;
use crate::consts;
use crate::models::chat::{ChatRequest, ChatResponse, EnvStatus};
use crate::resolver::ResponseResolver;

static INDEX_HTML: &str = include_str!("../static/index.html");
static STYLE_CSS: &str = include_str!("../static/style.css");
static SCRIPT_JS: &str = include_str!("../static/script.js");

pub async fn chat(resolver: Data<ResponseResolver>, request: Json<ChatRequest>) -> impl Responder {
    let request = request.into_inner();
    match &request.user_id {
        Some(user_id) => log::info!("received message from {}: {}", user_id, request.message),
        None => log::info!("received message: {}", request.message),
    }

    let response = resolver.resolve(&request.message).await;
    log::info!("responding with: {}", response);

    HttpResponse::Ok().json(ChatResponse { response })
}

pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(INDEX_HTML)
}

pub async fn static_file(file: Path<String>) -> impl Responder {
    match file.as_str() {
        "style.css" => HttpResponse::Ok()
            .content_type(mime::TEXT_CSS_UTF_8)
            .body(STYLE_CSS),
        "script.js" => HttpResponse::Ok()
            .content_type(mime::APPLICATION_JAVASCRIPT_UTF_8)
            .body(SCRIPT_JS),
        other => {
            log::debug!("static file not found: {:?}", other);
            HttpResponse::NotFound().finish()
        }
    }
}

pub async fn test_env(config: Data<config::Config>) -> impl Responder {
    let status = if config.has_api_key() {
        consts::API_KEY_LOADED_STATUS
    } else {
        consts::API_KEY_MISSING_STATUS
    };

    HttpResponse::Ok().json(EnvStatus {
        status: status.to_string(),
    })
}
