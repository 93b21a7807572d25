use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use lambda_http::RequestExt;
use lambda_http::request::RequestContext;

use srq_audit::access;
use srq_auth::caller::Caller;
use srq_auth::jwt::{bearer_token, validate_token};

use crate::error::ApiError;
use crate::state::AppState;

/// Bearer-token middleware.
///
/// Validates the `Authorization: Bearer <token>` header and inserts the
/// resulting [`Caller`] into request extensions for handlers to use. Every
/// authenticated request is appended to the access history once the handler
/// has run; a failure to record it is logged and does not fail the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let caller = {
        let header_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let token = bearer_token(header_value)?;
        validate_token(token, &state.auth.secret, state.auth.issuer.as_deref())?
    };

    let ip = access::client_ip(
        req.headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok()),
        peer_ip(&req),
    );

    req.extensions_mut().insert(caller.clone());
    let response = next.run(req).await;

    if let Err(e) = access::record_access(&state.store, &caller.user_id, ip).await {
        tracing::warn!(user_id = %caller.user_id, error = %e, "failed to record access");
    }

    Ok(response)
}

/// Address of the directly connected client: the socket peer when served
/// locally, the API Gateway source IP under Lambda.
fn peer_ip(req: &Request) -> Option<String> {
    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return Some(addr.ip().to_string());
    }
    match req.request_context_ref()? {
        RequestContext::ApiGatewayV2(ctx) => ctx.http.source_ip.clone(),
        RequestContext::ApiGatewayV1(ctx) => ctx.identity.source_ip.clone(),
        _ => None,
    }
}
