use crate::core::errors::UserError;
use crate::core::models::user::User;
use crate::infrastructure::storage::UserRepository;
use crate::infrastructure::storage::in_memory::InMemoryUserRepository;
use futures::TryStreamExt;

fn new_user(name: &str, email: &str) -> User {
    User {
        id: String::new(),
        name: name.to_string(),
        email: email.to_string(),
        password: "Secret1234@".to_string(),
    }
}

#[tokio::test]
async fn test_save_assigns_id() {
    let repository = InMemoryUserRepository::default();
    let saved = repository.save(new_user("Alice", "alice@email.com")).await.unwrap();
    assert!(!saved.id.is_empty());

    let found = repository.find_by_id(&saved.id).await.unwrap();
    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn test_save_rejects_duplicate_email() {
    let repository = InMemoryUserRepository::new("webflux.users");
    repository.save(new_user("Alice", "alice@email.com")).await.unwrap();

    let result = repository.save(new_user("Other", "alice@email.com")).await;
    match result {
        Err(UserError::DuplicateKey(message)) => {
            assert!(message.contains("collection: webflux.users"));
            assert!(message.contains("email dup key"));
        }
        other => panic!("expected duplicate key, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resaving_same_user_keeps_email_index() {
    let repository = InMemoryUserRepository::default();
    let mut saved = repository.save(new_user("Alice", "alice@email.com")).await.unwrap();
    saved.name = "Alicia".to_string();
    let updated = repository.save(saved.clone()).await.unwrap();
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.name, "Alicia");
}

#[tokio::test]
async fn test_changing_email_frees_old_one() {
    let repository = InMemoryUserRepository::default();
    let mut saved = repository.save(new_user("Alice", "alice@email.com")).await.unwrap();
    saved.email = "alicia@email.com".to_string();
    repository.save(saved).await.unwrap();

    assert!(repository.save(new_user("Bob", "alice@email.com")).await.is_ok());
}

#[tokio::test]
async fn test_find_all_in_insertion_order() {
    let repository = InMemoryUserRepository::default();
    for (name, email) in [("Alice", "a@email.com"), ("Bob", "b@email.com"), ("Carol", "c@email.com")] {
        repository.save(new_user(name, email)).await.unwrap();
    }

    let users: Vec<User> = repository.find_all().await.unwrap().try_collect().await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn test_find_all_on_empty_store() {
    let repository = InMemoryUserRepository::default();
    let users: Vec<User> = repository.find_all().await.unwrap().try_collect().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_find_and_remove() {
    let repository = InMemoryUserRepository::default();
    let saved = repository.save(new_user("Alice", "alice@email.com")).await.unwrap();

    let removed = repository.find_and_remove(&saved.id).await.unwrap();
    assert_eq!(removed, Some(saved.clone()));
    assert_eq!(repository.find_by_id(&saved.id).await.unwrap(), None);
    assert_eq!(repository.find_and_remove(&saved.id).await.unwrap(), None);

    // the email is free again
    assert!(repository.save(new_user("Alice", "alice@email.com")).await.is_ok());
}
