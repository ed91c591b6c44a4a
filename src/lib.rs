//! # Cinema booking store for Sea-ORM
//!
//! A small cinema booking backend: movies, cinema halls, scheduled movie
//! sessions, users, shopping carts, tickets and orders, persisted through
//! [Sea-ORM](https://crates.io/crates/sea-orm) on SQLite or PostgreSQL.
//!
//! ## Features
//!
//! - Generic create/read store for every catalog entity ([`EntityStore`])
//! - Day-based session lookup for a movie
//! - One shopping cart per user holding pending tickets
//! - Transactional cart-to-order conversion and order history
//! - Salted password storage with email/password login
//! - Schema migrations behind the `migration` feature
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::{Duration, Local};
//! use cinema_seaorm_store::entity::cinema_hall::NewCinemaHall;
//! use cinema_seaorm_store::entity::movie::NewMovie;
//! use cinema_seaorm_store::entity::movie_session::NewMovieSession;
//! use cinema_seaorm_store::{CinemaServices, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let services = CinemaServices::connect(&DatabaseConfig::from_env()).await?;
//!
//! let movie = services.movies.add(NewMovie::new("Fast and Furious")).await?;
//! let hall = services.cinema_halls.add(NewCinemaHall::new(100)).await?;
//! let session = services
//!     .movie_sessions
//!     .add(NewMovieSession {
//!         movie_id: movie.id,
//!         cinema_hall_id: hall.id,
//!         show_time: Local::now().naive_local() + Duration::days(1),
//!     })
//!     .await?;
//!
//! let user = services
//!     .authentication
//!     .register("test@example.com", "password123")
//!     .await?;
//! services.shopping_carts.add_session(&session, &user).await?;
//!
//! if let Some(cart) = services.shopping_carts.get_by_user(&user).await? {
//!     let order = services.orders.complete_order(&cart).await?;
//!     assert_eq!(order.tickets.len(), 1);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Ticket lifecycle
//!
//! A ticket is created by [`ShoppingCartService::add_session`] and is pending
//! in the user's cart. [`OrderService::complete_order`] moves all pending
//! tickets of a cart into a new order in one transaction; from then on they
//! are finalized and never leave the order.

pub mod config;
pub mod entity;
pub mod error;
#[cfg(feature = "migration")]
pub mod migration;
pub mod password;
pub mod service;
mod services;
pub mod store;

pub use config::DatabaseConfig;
pub use error::{CinemaError, Result};
pub use service::{
    AuthenticationService, MovieSessionService, Order, OrderService, ShoppingCart,
    ShoppingCartService, UserService,
};
pub use services::CinemaServices;
pub use store::{CinemaHallService, EntityStore, MovieService, TicketService, Validate};
