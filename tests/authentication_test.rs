#![cfg(all(feature = "sqlite", feature = "migration"))]

mod common;

use cinema_seaorm_store::entity::user::NewUser;
use cinema_seaorm_store::CinemaError;
use common::setup;

#[tokio::test]
async fn test_register_creates_user_and_empty_cart() {
    let services = setup().await;

    let user = services
        .authentication
        .register("test@example.com", "password123")
        .await
        .unwrap();

    assert_eq!(user.email, "test@example.com");
    assert_ne!(user.password, "password123");

    let cart = services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .expect("registration should create the cart");
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_login_with_correct_credentials() {
    let services = setup().await;
    let registered = services
        .authentication
        .register("test@example.com", "password123")
        .await
        .unwrap();

    let logged_in = services
        .authentication
        .login("test@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(logged_in, registered);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let services = setup().await;
    services
        .authentication
        .register("test@example.com", "password123")
        .await
        .unwrap();

    let wrong_password = services
        .authentication
        .login("test@example.com", "password124")
        .await
        .unwrap_err();
    let unknown_email = services
        .authentication
        .login("nobody@example.com", "password123")
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, CinemaError::Authentication(_)));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let services = setup().await;
    services
        .authentication
        .register("test@example.com", "password123")
        .await
        .unwrap();

    let err = services
        .authentication
        .register("test@example.com", "other")
        .await
        .unwrap_err();
    assert!(matches!(err, CinemaError::Validation(_)));
}

#[tokio::test]
async fn test_concurrent_duplicate_registration_is_a_validation_error() {
    let services = setup().await;

    let (first, second) = tokio::join!(
        services
            .users
            .add(NewUser::new("race@example.com", "password123")),
        services
            .users
            .add(NewUser::new("race@example.com", "password123")),
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let err = results
        .into_iter()
        .find_map(|r| r.err())
        .expect("one registration should fail");
    assert!(matches!(err, CinemaError::Validation(_)), "{err}");
}

#[tokio::test]
async fn test_find_by_email() {
    let services = setup().await;
    let user = services
        .users
        .add(NewUser::new("test@example.com", "password123"))
        .await
        .unwrap();

    assert_eq!(
        services.users.find_by_email("test@example.com").await.unwrap(),
        Some(user.clone())
    );
    assert_eq!(services.users.get(user.id).await.unwrap(), user);
    assert!(services
        .users
        .find_by_email("missing@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_salts_differ_between_users() {
    let services = setup().await;
    let a = services
        .users
        .add(NewUser::new("a@example.com", "same"))
        .await
        .unwrap();
    let b = services
        .users
        .add(NewUser::new("b@example.com", "same"))
        .await
        .unwrap();

    assert_ne!(a.salt, b.salt);
    assert_ne!(a.password, b.password);
}
