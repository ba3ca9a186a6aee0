pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod faq;
pub mod handlers;
pub mod llm_client;
pub(crate) mod llm_request;
pub mod models;
pub mod resolver;
