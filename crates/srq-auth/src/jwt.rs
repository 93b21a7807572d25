use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::caller::Caller;
use crate::error::AuthError;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Grants access to statistics, export, user listing and access history.
    #[serde(default)]
    pub is_staff: bool,
}

/// Validate an HS256 token and return the caller it identifies.
///
/// When `issuer` is set the `iss` claim must match it. The subject is used as
/// a storage path segment, so it must be non-empty and free of `/`.
pub fn validate_token(token: &str, secret: &[u8], issuer: Option<&str>) -> Result<Caller, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "sub"]);
    if let Some(iss) = issuer {
        validation.set_issuer(&[iss]);
    }

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AuthError::from(e)
        })?;

    let sub = &token_data.claims.sub;
    if sub.is_empty() || sub.contains('/') {
        return Err(AuthError::InvalidToken(format!("unusable subject: {sub:?}")));
    }

    Ok(token_data.claims.into())
}

/// Sign `claims` with the shared secret, as the identity provider does.
pub fn issue_token(claims: &Claims, secret: &[u8]) -> Result<String, AuthError> {
    Ok(encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )?)
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)
}
