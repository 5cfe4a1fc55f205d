//! Signed-token fixtures for identity tests.

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::TestError;

/// Mint an HS256 identity token for `subject`, valid for an hour.
pub fn mint_token(secret: &str, subject: &str) -> Result<String, TestError> {
    let exp = chrono::Utc::now().timestamp() + 3600;
    let claims = serde_json::json!({ "sub": subject, "exp": exp });

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}
