//! Workflow services layered over the entity stores.
//!
//! Plain catalog stores ([`MovieService`](crate::MovieService),
//! [`CinemaHallService`](crate::CinemaHallService)) live in
//! [`store`](crate::store); everything with behaviour beyond create/read is
//! here.

mod authentication;
mod movie_session;
mod order;
mod shopping_cart;
mod user;

pub use authentication::AuthenticationService;
pub use movie_session::MovieSessionService;
pub use order::{Order, OrderService};
pub use shopping_cart::{ShoppingCart, ShoppingCartService};
pub use user::UserService;
