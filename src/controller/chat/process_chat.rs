use actix_web::{web, HttpResponse};
use chrono::Utc;
use futures::StreamExt;
use uuid::Uuid;

use crate::error::AppError;
use crate::service::RelayService;

/// `POST /api/process-chat`
///
/// Body: `{ "chatText": "..." }`. On success the completion API's JSON is relayed
/// with status 200; every failure is answered with `{ "error": "..." }`.
///
/// The body is streamed by hand so that a missing credential is reported
/// before the payload is read or its size limit applied.
pub async fn process_chat(
    relay: web::Data<RelayService>,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let request_id = Uuid::new_v4();
    let start_time = Utc::now();

    log::info!("[{}] Received chat relay request", request_id);

    let outcome = async {
        let api_key = relay.api_key()?;
        let body = read_body(payload, relay.max_body_bytes()).await?;
        log::debug!("[{}] Read {} byte body", request_id, body.len());
        relay.relay(api_key, &body).await
    }
    .await;

    match outcome {
        Ok(completion) => {
            let duration = Utc::now() - start_time;
            log::info!(
                "[{}] Relayed completion from model {} in {}ms",
                request_id,
                relay.model(),
                duration.num_milliseconds()
            );
            Ok(HttpResponse::Ok().json(completion))
        }
        Err(e) => {
            let duration = Utc::now() - start_time;
            match &e {
                AppError::Validation(_) => {
                    log::warn!("[{}] Rejected request: {}", request_id, e)
                }
                _ => log::error!(
                    "[{}] Chat relay failed after {}ms: {}",
                    request_id,
                    duration.num_milliseconds(),
                    e
                ),
            }
            Err(e)
        }
    }
}

async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, AppError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| AppError::from_framework(&actix_web::Error::from(e)))?;
        if body.len() + chunk.len() > limit {
            return Err(AppError::payload_too_large());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::method_not_allowed())
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found())
}
