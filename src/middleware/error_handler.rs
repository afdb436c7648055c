use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error as ActixError, ResponseError,
};
use std::{future::Future, pin::Pin};

use crate::error::AppError;

/// Rewrites framework-generated error responses (payload limits, extractor
/// failures, anything not raised as [`AppError`]) into the `{ "error": ... }` shape.
pub struct ErrorHandlerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = ActixError;
    type Transform = ErrorHandlerService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;

    fn new_transform(&self, service: S) -> Self::Future {
        Box::pin(async move { Ok(ErrorHandlerService { service }) })
    }
}

pub struct ErrorHandlerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Owned copies only: the router needs sole ownership of the HttpRequest.
        let method = req.method().to_string();
        let uri = req.uri().to_string();

        log::debug!("Handling request: method={}, uri={}", method, uri);

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let foreign = res
                        .response()
                        .error()
                        .filter(|err| err.as_error::<AppError>().is_none())
                        .map(AppError::from_framework);

                    match foreign {
                        Some(app_error) => {
                            log::debug!("Converted framework error to: {:?}", app_error);
                            Ok(res.into_response(app_error.error_response()))
                        }
                        None => Ok(res.map_into_boxed_body()),
                    }
                }
                Err(err) => {
                    log::error!("Request failed: {} {}", method, uri);
                    log::debug!("Error details: {:?}", err);
                    Err(err)
                }
            }
        })
    }
}

pub fn error_handler() -> ErrorHandlerMiddleware {
    ErrorHandlerMiddleware
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn rejected() -> Result<HttpResponse, actix_web::Error> {
        Err(actix_web::error::ErrorUnprocessableEntity("unreadable header"))
    }

    async fn relay_failure() -> Result<HttpResponse, AppError> {
        Err(AppError::Validation("No chat text provided.".to_string()))
    }

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().body("fine")
    }

    #[actix_web::test]
    async fn rewrites_framework_errors_into_error_shape() {
        let app = test::init_service(
            App::new().wrap(error_handler()).route("/rejected", web::post().to(rejected)),
        )
        .await;

        let req = test::TestRequest::post().uri("/rejected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 422);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "unreadable header" }));
    }

    #[actix_web::test]
    async fn leaves_app_errors_and_successes_alone() {
        let app = test::init_service(
            App::new()
                .wrap(error_handler())
                .route("/relay", web::post().to(relay_failure))
                .route("/ok", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::post().uri("/relay").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "No chat text provided." }));

        let req = test::TestRequest::get().uri("/ok").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(test::read_body(resp).await, "fine");
    }
}
