use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;
use warehouse_packing_api::{
    dto::auth::Claims,
    error::AppError,
    services::auth_service::{hash_password, issue_token, validate_token, verify_credential},
};

const SECRET: &str = "test-secret";

#[test]
fn issued_token_carries_packer_identity() {
    let packer_id = Uuid::new_v4();
    let token = issue_token(SECRET, packer_id, "packer1", 60).expect("token");

    let claims = validate_token(SECRET, &token).expect("valid token");
    assert_eq!(claims.sub, packer_id.to_string());
    assert_eq!(claims.username, "packer1");
    assert!(claims.exp > Utc::now().timestamp() as usize);
}

#[test]
fn token_signed_with_other_secret_is_forbidden() {
    let token = issue_token("other-secret", Uuid::new_v4(), "packer1", 60).expect("token");
    let err = validate_token(SECRET, &token).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[test]
fn expired_token_is_forbidden() {
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "packer1".into(),
        exp: (Utc::now().timestamp() - 3600) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode");

    let err = validate_token(SECRET, &token).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[test]
fn garbage_token_is_forbidden() {
    assert!(matches!(
        validate_token(SECRET, "not-a-jwt"),
        Err(AppError::Forbidden(_))
    ));
}

#[test]
fn credential_verification() {
    let hash = hash_password("packer1pass").expect("hash");
    assert!(verify_credential("packer1pass", &hash).expect("verify"));
    assert!(!verify_credential("wrong", &hash).expect("verify"));

    let err = verify_credential("packer1pass", "not-a-phc-string").unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
}

#[test]
fn out_of_range_lifetime_is_an_error_not_a_panic() {
    let err = issue_token(SECRET, Uuid::new_v4(), "packer1", i64::MAX).unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
}
