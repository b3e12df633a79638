//! # Authentication Module
//!
//! Admin routes are guarded by a single shared bearer token. Only its Argon2
//! hash is configured on the server (`ADMIN_TOKEN_HASH`); the `seed-admin`
//! binary produces that hash from a chosen token.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use eyre::Result;
use meetbook_core::errors::BookingError;

use crate::middleware::error_handling::AppError;

/// Hashes a secret using the Argon2 algorithm
///
/// Generates a random salt and returns the hash in PHC string format
/// (algorithm, version, parameters, salt and hash in one string).
///
/// # Example
///
/// ```rust
/// use meetbook_api::middleware::auth::hash_password;
///
/// let hashed = hash_password("admin-token").unwrap();
/// assert!(hashed.starts_with("$argon2"));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks a secret against a stored PHC hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verifies the admin bearer token of a request.
///
/// Fails with `Authentication` when admin access is not configured, when the
/// header is missing or malformed, or when the token does not match.
pub fn require_admin(headers: &HeaderMap, admin_token_hash: Option<&str>) -> Result<(), AppError> {
    let Some(hash) = admin_token_hash else {
        return Err(AppError(BookingError::Authentication(
            "Admin access is not configured".to_string(),
        )));
    };

    let token = bearer_token(headers).ok_or_else(|| {
        BookingError::Authentication("Missing bearer token".to_string())
    })?;

    let valid = verify_password(token, hash)
        .map_err(|e| BookingError::Internal(e.to_string().into()))?;
    if !valid {
        return Err(AppError(BookingError::Authentication(
            "Invalid admin token".to_string(),
        )));
    }

    Ok(())
}
