// storefront/services/users/src/auth.rs

//! Password hashing and verification.

use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use storefront_core::{AppError, Result};
use tracing::{debug, error, instrument};

/// Hashes a plain-text password with Argon2 and a fresh random salt.
#[instrument(name = "auth::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  match Argon2::default().hash_password(password.as_bytes(), &salt) {
    Ok(hash) => Ok(hash.to_string()),
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(AppError::Internal(format!("Password hashing failed: {}", argon_err)))
    }
  }
}

/// Verifies a plain-text password against a stored Argon2 hash string.
///
/// `Ok(false)` means the password simply does not match; an `Err` means the
/// stored hash is unreadable or verification itself broke.
#[instrument(name = "auth::verify_password", skip(stored_hash, provided_password), err(Display))]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool> {
  let parsed_hash = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Failed to parse stored password hash.");
    AppError::Internal(format!("Invalid stored password hash: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(other) => {
      error!(error = %other, "Argon2 verification errored.");
      Err(AppError::Internal(format!("Password verification failed: {}", other)))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hash_then_verify_round_trips() {
    let hash = hash_password("correct horse battery staple").unwrap();
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password(&hash, "correct horse battery staple").unwrap());
  }

  #[test]
  fn wrong_password_verifies_false_not_err() {
    let hash = hash_password("secret-one").unwrap();
    assert!(!verify_password(&hash, "secret-two").unwrap());
  }

  #[test]
  fn empty_password_is_rejected() {
    assert!(matches!(hash_password(""), Err(AppError::Validation(_))));
  }

  #[test]
  fn garbage_stored_hash_is_an_internal_error() {
    assert!(matches!(
      verify_password("not-a-phc-string", "anything"),
      Err(AppError::Internal(_))
    ));
  }
}
