use super::types::{ErrorResponse, GenerateRequest};
use crate::generator::{self, GenerateResult};
use axum::{
    http::{HeaderMap, StatusCode},
    response::Json,
};
use tracing::{info, warn};
use uuid::Uuid;

pub async fn generate(
    headers: HeaderMap,
    body: String,
) -> Result<Json<GenerateResult>, (StatusCode, Json<ErrorResponse>)> {
    // Use the request id supplied by the invoking context if there is one
    let request_id = headers
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let request = match GenerateRequest::parse(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected generation request {}: {}", request_id, e);
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ));
        }
    };

    info!(
        "Received generation request {} with style: {}",
        request_id, request.style
    );

    let template = generator::select(&request.description);
    let result = generator::assemble(template, request_id);

    info!(
        "Selected template '{}' for request {}",
        result.template.name, result.request_id
    );

    Ok(Json(result))
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}
