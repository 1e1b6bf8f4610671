use crate::core::errors::UserError;
use crate::core::models::user::{User, UserRequest};
use crate::tests::{EMAIL, NAME, PASSWORD, create_test_service};
use futures::TryStreamExt;

#[tokio::test]
async fn test_save_then_find_by_id() {
    let service = create_test_service();
    let saved = service.save(UserRequest::new(NAME, EMAIL, PASSWORD)).await.unwrap();
    assert!(!saved.id.is_empty());

    let found = service.find_by_id(&saved.id).await.unwrap();
    assert_eq!(found.name, NAME);
    assert_eq!(found.email, EMAIL);
    assert_eq!(found.password, PASSWORD);
}

#[tokio::test]
async fn test_save_duplicate_email() {
    let service = create_test_service();
    service.save(UserRequest::new(NAME, EMAIL, PASSWORD)).await.unwrap();

    let result = service.save(UserRequest::new("Another", EMAIL, PASSWORD)).await;
    assert!(matches!(result, Err(UserError::DuplicateKey(_))));
}

#[tokio::test]
async fn test_handle_not_found() {
    let service = create_test_service();
    let expected = "Object not found. ID: 1, Type User";

    let err = service.find_by_id("1").await.unwrap_err();
    assert!(matches!(err, UserError::NotFound(_)));
    assert_eq!(err.to_string(), expected);

    let err = service.update("1", UserRequest::new(NAME, EMAIL, PASSWORD)).await.unwrap_err();
    assert_eq!(err.to_string(), expected);

    let err = service.delete("1").await.unwrap_err();
    assert_eq!(err.to_string(), expected);
}

#[tokio::test]
async fn test_find_all() {
    let service = create_test_service();
    let empty: Vec<User> = service.find_all().await.unwrap().try_collect().await.unwrap();
    assert!(empty.is_empty());

    service.save(UserRequest::new(NAME, EMAIL, PASSWORD)).await.unwrap();
    service
        .save(UserRequest::new("Beatriz", "beatriz@email.com", PASSWORD))
        .await
        .unwrap();

    let users: Vec<User> = service.find_all().await.unwrap().try_collect().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_update_merges_partial_request() {
    let service = create_test_service();
    let saved = service.save(UserRequest::new(NAME, EMAIL, PASSWORD)).await.unwrap();

    let request = UserRequest {
        email: Some("new@email.com".to_string()),
        ..Default::default()
    };
    let updated = service.update(&saved.id, request).await.unwrap();
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.name, NAME);
    assert_eq!(updated.email, "new@email.com");
    assert_eq!(updated.password, PASSWORD);

    let found = service.find_by_id(&saved.id).await.unwrap();
    assert_eq!(found, updated);
}

#[tokio::test]
async fn test_update_to_taken_email_fails() {
    let service = create_test_service();
    service.save(UserRequest::new(NAME, EMAIL, PASSWORD)).await.unwrap();
    let other = service
        .save(UserRequest::new("Beatriz", "beatriz@email.com", PASSWORD))
        .await
        .unwrap();

    let request = UserRequest {
        email: Some(EMAIL.to_string()),
        ..Default::default()
    };
    let result = service.update(&other.id, request).await;
    assert!(matches!(result, Err(UserError::DuplicateKey(_))));
}

#[tokio::test]
async fn test_delete() {
    let service = create_test_service();
    let saved = service.save(UserRequest::new(NAME, EMAIL, PASSWORD)).await.unwrap();

    let removed = service.delete(&saved.id).await.unwrap();
    assert_eq!(removed, saved);
    assert!(matches!(
        service.find_by_id(&saved.id).await,
        Err(UserError::NotFound(_))
    ));
}
