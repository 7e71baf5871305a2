// storefront/services/users/src/models.rs

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub password: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_fields_default_to_empty_for_validation() {
    let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
    assert!(req.name.is_empty());
    assert_eq!(req.email, "a@x.com");
    assert!(req.password.is_empty());
  }
}
