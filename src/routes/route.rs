use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};

use crate::controller::chat::{method_not_allowed, not_found, process_chat};
use crate::middleware::{error_handler, Logging};
use crate::service::RelayService;

pub const PROCESS_CHAT_PATH: &str = "/api/process-chat";
/// Path used by the Netlify-hosted frontend; served here as a drop-in alias.
pub const NETLIFY_PROCESS_CHAT_PATH: &str = "/.netlify/functions/process-chat";

fn process_chat_resource(path: &str) -> actix_web::Resource {
    web::resource(path)
        .route(web::post().to(process_chat))
        .default_service(web::to(method_not_allowed))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(process_chat_resource(PROCESS_CHAT_PATH))
        .service(process_chat_resource(NETLIFY_PROCESS_CHAT_PATH))
        .default_service(web::to(not_found));
}

/// The complete application as served by `main`: routes, error shaping and access log.
pub fn app(
    relay: web::Data<RelayService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    App::new().app_data(relay).wrap(error_handler()).wrap(Logging).configure(configure)
}
