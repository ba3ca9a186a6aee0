use std::sync::Arc;

use actix_web::HttpServer;

use faq_relay::app::create_app;
use faq_relay::config;
use faq_relay::llm_client::{LLMClient, LLMClientTrait};
use faq_relay::resolver::ResponseResolver;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing FAQ relay service...");

    let config = config::load_config()?;

    let http_client = LLMClient::build_http_client(&config.completion)?;
    let llm_client = LLMClient::from_config(http_client, &config.completion);
    if !llm_client.is_configured() {
        log::error!(
            "{} not found in environment variables.",
            config.completion.api_key_env
        );
    }

    let faq = Arc::new(config.faq_table());
    log::info!("loaded {} FAQ entries", faq.len());

    let resolver = Arc::new(
        ResponseResolver::new(faq, Arc::new(llm_client))
            .with_keyword_redirect(config.keyword_redirect.clone()),
    );
    let bind_address = (config.bind_address.clone(), config.port);
    let config = Arc::new(config);

    log::info!("listening on {}:{}", bind_address.0, bind_address.1);
    HttpServer::new(move || create_app(resolver.clone(), config.clone()))
        .bind(bind_address)?
        .run()
        .await
}
