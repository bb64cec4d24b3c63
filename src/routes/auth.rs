use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Why a request failed HTTP Basic authentication
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("ADO_WEBHOOK_USER / ADO_WEBHOOK_PASS are not configured")]
    NotConfigured,

    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header does not use the Basic scheme")]
    InvalidScheme,

    #[error("Credentials are not valid base64: {0}")]
    InvalidEncoding(String),

    #[error("Credentials are not valid UTF-8")]
    InvalidUtf8,

    #[error("Credentials are missing the ':' separator")]
    MissingSeparator,

    #[error("Credentials mismatch")]
    Mismatch,
}

/// Check an `Authorization: Basic ...` header against the configured
/// username and password.
///
/// Fails closed when no credentials are configured. The decoded value is
/// split on the first ':' so usernames cannot contain a colon while
/// passwords can.
pub fn verify_basic_auth(
    header: Option<&str>,
    expected: Option<(&str, &str)>,
) -> Result<(), AuthError> {
    let (expected_user, expected_pass) = expected.ok_or(AuthError::NotConfigured)?;
    let header = header.ok_or(AuthError::MissingHeader)?;

    let (scheme, token) = header.split_once(' ').ok_or(AuthError::InvalidScheme)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::InvalidScheme);
    }

    let decoded = STANDARD
        .decode(token.trim())
        .map_err(|e| AuthError::InvalidEncoding(e.to_string()))?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::InvalidUtf8)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MissingSeparator)?;

    if username == expected_user && password == expected_pass {
        Ok(())
    } else {
        Err(AuthError::Mismatch)
    }
}
