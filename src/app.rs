use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{config, handlers, resolver};

pub fn create_app(
    resolver: Arc<resolver::ResponseResolver>,
    config: Arc<config::Config>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(resolver))
        .app_data(Data::from(config))
        .route("/", web::get().to(handlers::home))
        .route("/chat/", web::post().to(handlers::chat))
        .route("/chat", web::post().to(handlers::chat))
        .route("/test-env", web::get().to(handlers::test_env))
        .route("/static/{file}", web::get().to(handlers::static_file))
}
