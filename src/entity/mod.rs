//! Sea-ORM entity definitions for the cinema schema.
//!
//! One module per table. Catalog tables (`movie`, `cinema_hall`,
//! `movie_session`) and `users` are plain records; `ticket` rows move between
//! a shopping cart and an order through the `shopping_cart_ticket` and
//! `order_ticket` join tables, both keyed by `ticket_id` so a ticket can sit in
//! at most one of each.

pub mod cinema_hall;
pub mod movie;
pub mod movie_session;
pub mod order;
pub mod order_ticket;
pub mod shopping_cart;
pub mod shopping_cart_ticket;
pub mod ticket;
pub mod user;
