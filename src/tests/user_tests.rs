use super::{create_test_service, register_test_user};
use crate::core::errors::DivvyError;

#[tokio::test]
async fn test_register_and_fetch_user() {
    let service = create_test_service();

    let user = register_test_user(&service, "Alice").await;
    let fetched = service.get_user(&user.id).await.unwrap().unwrap();

    assert_eq!(fetched.name, "Alice");
    assert_eq!(fetched.email, "alice@example.com");
    assert_ne!(fetched.password, "hunter2!"); // stored hashed
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let service = create_test_service();

    register_test_user(&service, "Alice").await;
    let result = service
        .register_user(
            "Alice Again".to_string(),
            "alice@example.com".to_string(),
            "hunter2!",
        )
        .await;

    assert!(matches!(result, Err(DivvyError::EmailAlreadyRegistered(_))));
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let service = create_test_service();

    let result = service
        .register_user("Bob".to_string(), "not-an-email".to_string(), "hunter2!")
        .await;

    assert!(matches!(result, Err(DivvyError::InvalidEmail(_))));
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let service = create_test_service();

    let result = service
        .register_user("  ".to_string(), "bob@example.com".to_string(), "hunter2!")
        .await;

    assert!(matches!(result, Err(DivvyError::InvalidInput(_, _))));
}

#[tokio::test]
async fn test_authenticate_issues_a_valid_token() {
    let service = create_test_service();

    let user = register_test_user(&service, "Alice").await;
    let token = service
        .authenticate("alice@example.com", "hunter2!")
        .await
        .unwrap();

    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let service = create_test_service();

    register_test_user(&service, "Alice").await;
    let result = service.authenticate("alice@example.com", "wrong").await;

    assert!(matches!(result, Err(DivvyError::InvalidCredentials)));
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let service = create_test_service();
    assert!(matches!(
        service.validate_token("not.a.jwt"),
        Err(DivvyError::Unauthorized(_))
    ));
}
