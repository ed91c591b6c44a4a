#![cfg(all(feature = "sqlite", feature = "migration"))]

mod common;

use cinema_seaorm_store::entity::movie_session;
use common::{booking_fixture, setup, user};

#[tokio::test]
async fn test_cart_is_absent_until_registered() {
    let services = setup().await;
    let user = user(&services, "late@example.com").await;

    assert!(services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .is_none());

    services
        .shopping_carts
        .register_new_shopping_cart(&user)
        .await
        .unwrap();

    let cart = services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cart.user_id, user.id);
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_add_session_grows_cart_by_one_ticket() {
    let services = setup().await;
    let (user, first, second) = booking_fixture(&services).await;

    let ticket = services
        .shopping_carts
        .add_session(&first, &user)
        .await
        .unwrap();
    assert_eq!(ticket.movie_session_id, first.id);
    assert_eq!(ticket.user_id, user.id);

    let cart = services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cart.tickets, vec![ticket.clone()]);

    let another = services
        .shopping_carts
        .add_session(&second, &user)
        .await
        .unwrap();
    let cart = services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cart.tickets, vec![ticket, another]);
}

#[tokio::test]
async fn test_same_session_twice_gives_two_tickets() {
    let services = setup().await;
    let (user, first, _) = booking_fixture(&services).await;

    let a = services.shopping_carts.add_session(&first, &user).await.unwrap();
    let b = services.shopping_carts.add_session(&first, &user).await.unwrap();
    assert_ne!(a.id, b.id);

    let cart = services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cart.tickets.len(), 2);
}

#[tokio::test]
async fn test_add_session_without_cart_is_not_found() {
    let services = setup().await;
    let (_, first, _) = booking_fixture(&services).await;
    let stranger = user(&services, "stranger@example.com").await;

    let err = services
        .shopping_carts
        .add_session(&first, &stranger)
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "{err}");

    // The failed booking leaves no ticket behind.
    assert!(services.tickets.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_unknown_session_is_not_found() {
    let services = setup().await;
    let (user, first, _) = booking_fixture(&services).await;
    let unsaved = movie_session::Model {
        id: 999,
        ..first.clone()
    };

    let err = services
        .shopping_carts
        .add_session(&unsaved, &user)
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "{err}");
    assert_eq!(err.code(), "NOT_FOUND");

    assert!(services.tickets.get_all().await.unwrap().is_empty());
    let cart = services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .unwrap();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_register_cart_for_unknown_user_is_not_found() {
    let services = setup().await;
    let unsaved = cinema_seaorm_store::entity::user::Model {
        id: 777,
        email: "nobody@example.com".to_string(),
        password: String::new(),
        salt: Vec::new(),
    };

    let err = services
        .shopping_carts
        .register_new_shopping_cart(&unsaved)
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "{err}");
    assert!(services
        .shopping_carts
        .get_by_user(&unsaved)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_registering_twice_keeps_the_existing_cart() {
    let services = setup().await;
    let (user, first, _) = booking_fixture(&services).await;
    services
        .shopping_carts
        .add_session(&first, &user)
        .await
        .unwrap();

    let again = services
        .shopping_carts
        .register_new_shopping_cart(&user)
        .await
        .unwrap();

    assert_eq!(again.id, user.id);
    assert_eq!(again.tickets.len(), 1);
}

#[tokio::test]
async fn test_carts_are_per_user() {
    let services = setup().await;
    let (alice, first, _) = booking_fixture(&services).await;
    let bob = user(&services, "bob@example.com").await;
    services
        .shopping_carts
        .register_new_shopping_cart(&bob)
        .await
        .unwrap();

    services
        .shopping_carts
        .add_session(&first, &alice)
        .await
        .unwrap();

    let bobs = services
        .shopping_carts
        .get_by_user(&bob)
        .await
        .unwrap()
        .unwrap();
    assert!(bobs.is_empty());
}

#[tokio::test]
async fn test_clear_detaches_tickets_but_keeps_them() {
    let services = setup().await;
    let (user, first, second) = booking_fixture(&services).await;
    services.shopping_carts.add_session(&first, &user).await.unwrap();
    services.shopping_carts.add_session(&second, &user).await.unwrap();

    let cart = services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .unwrap();
    services.shopping_carts.clear(&cart).await.unwrap();

    let cart = services
        .shopping_carts
        .get_by_user(&user)
        .await
        .unwrap()
        .unwrap();
    assert!(cart.is_empty());
    assert_eq!(services.tickets.get_all().await.unwrap().len(), 2);
}
