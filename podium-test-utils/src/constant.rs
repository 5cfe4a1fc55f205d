//! Shared constant values for tests.

/// Signing secret used when minting test identity tokens.
///
/// Placeholder value, not a real credential.
pub static TEST_AUTH_TOKEN_SECRET: &str = "auth_token_secret";
