//! Chat Relay
//!
//! Forwards a chat transcript, together with a fixed transaction-extraction
//! prompt, to an OpenRouter-compatible chat-completions API and relays the
//! completion back to the caller unchanged.
//!
//! # Modules
//! - `controller`: HTTP handlers
//! - `entities`: inbound request and outbound payload shapes
//! - `error`: error taxonomy and its HTTP mapping
//! - `middleware`: request logging and error-shape normalisation
//! - `routes`: endpoint registration
//! - `service`: the relay pipeline and the completion client
//! - `utils`: configuration and startup
//!
//! # Examples
//! ```no_run
//! use std::sync::Arc;
//! use actix_web::{web, HttpServer};
//! use chat_relay::service::{OpenRouterClient, RelayService};
//! use chat_relay::utils::AppConfig;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::default();
//!     let client = OpenRouterClient::new(&config.upstream).expect("client");
//!     let relay = web::Data::new(RelayService::new(
//!         Arc::new(client),
//!         config.upstream.model.clone(),
//!         config.api_key(),
//!     ));
//!     HttpServer::new(move || chat_relay::routes::app(relay.clone()))
//!     .bind("127.0.0.1:8888")?
//!     .run()
//!     .await
//! }
//! ```

pub mod controller;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod utils;

pub use entities::*;
pub use error::*;
