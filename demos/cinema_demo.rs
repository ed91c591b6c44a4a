//! Console walkthrough of the cinema booking workflow.
//!
//! Creates a movie, two halls and two sessions (tomorrow and yesterday),
//! registers a user, fills their shopping cart, completes the order and prints
//! the order history.
//!
//! # Running the example
//!
//! By default everything lives in an in-memory SQLite database:
//!
//! ```bash
//! cargo run --example cinema_demo
//! ```
//!
//! Point it at a file or a PostgreSQL server with `DATABASE_URL` (a `.env`
//! file is read as well):
//!
//! ```bash
//! DATABASE_URL=sqlite://cinema.db?mode=rwc cargo run --example cinema_demo
//! ```

use chrono::{Duration, Local};
use cinema_seaorm_store::entity::cinema_hall::NewCinemaHall;
use cinema_seaorm_store::entity::movie::NewMovie;
use cinema_seaorm_store::entity::movie_session::NewMovieSession;
use cinema_seaorm_store::entity::ticket::NewTicket;
use cinema_seaorm_store::entity::user::NewUser;
use cinema_seaorm_store::{CinemaServices, DatabaseConfig};
use dotenvy::dotenv;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    dotenv().ok();

    let config = DatabaseConfig::from_env();
    info!("Connecting to database: {}", config.url);
    let services = CinemaServices::connect(&config).await?;

    // Movies
    let fast_and_furious = services
        .movies
        .add(
            NewMovie::new("Fast and Furious")
                .with_description("An action film about street racing, heists, and spies."),
        )
        .await?;
    println!("{:?}", services.movies.get(fast_and_furious.id).await?);
    for movie in services.movies.get_all().await? {
        println!("{:?}", movie);
    }

    // Cinema halls
    let first_hall = services
        .cinema_halls
        .add(NewCinemaHall::new(100).with_description("first hall with capacity 100"))
        .await?;
    services
        .cinema_halls
        .add(NewCinemaHall::new(200).with_description("second hall with capacity 200"))
        .await?;
    println!("{:?}", services.cinema_halls.get_all().await?);
    println!("{:?}", services.cinema_halls.get(first_hall.id).await?);

    // Movie sessions
    let now = Local::now().naive_local();
    let tomorrow_session = services
        .movie_sessions
        .add(NewMovieSession {
            movie_id: fast_and_furious.id,
            cinema_hall_id: first_hall.id,
            show_time: now + Duration::days(1),
        })
        .await?;
    let yesterday_session = services
        .movie_sessions
        .add(NewMovieSession {
            movie_id: fast_and_furious.id,
            cinema_hall_id: first_hall.id,
            show_time: now - Duration::days(1),
        })
        .await?;

    println!("{:?}", services.movie_sessions.get(yesterday_session.id).await?);
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    for session in services
        .movie_sessions
        .find_available_sessions(fast_and_furious.id, tomorrow)
        .await?
    {
        println!("{:?}", session);
    }
    println!("\n--- MovieSession Testing Complete ---\n");

    // Users
    let test_user = services
        .users
        .add(NewUser::new("test@example.com", "password123"))
        .await?;
    println!(
        "Added User: {:?}\n",
        services.users.find_by_email("test@example.com").await?
    );

    // Shopping cart before registration
    println!(
        "User's Shopping Cart (initially): {:?}\n",
        services.shopping_carts.get_by_user(&test_user).await?
    );

    // Loose tickets never enter the cart
    for _ in 0..2 {
        services
            .tickets
            .add(NewTicket {
                movie_session_id: tomorrow_session.id,
                user_id: test_user.id,
            })
            .await?;
    }

    println!("--- Testing ShoppingCartService (addSession) ---\n");
    services
        .shopping_carts
        .register_new_shopping_cart(&test_user)
        .await?;
    services
        .shopping_carts
        .add_session(&tomorrow_session, &test_user)
        .await?;
    println!(
        "User's Shopping Cart after adding session: {:?}\n",
        services.shopping_carts.get_by_user(&test_user).await?
    );

    services
        .shopping_carts
        .add_session(&yesterday_session, &test_user)
        .await?;
    println!(
        "User's Shopping Cart after adding another session: {:?}\n",
        services.shopping_carts.get_by_user(&test_user).await?
    );
    println!("\n--- ShoppingCartService Testing Complete ---\n");

    // Orders
    println!("--- Testing OrderService ---\n");
    println!("Completing order for user: {}", test_user.email);
    let Some(current_cart) = services.shopping_carts.get_by_user(&test_user).await? else {
        return Err("shopping cart disappeared".into());
    };

    let completed_order = services.orders.complete_order(&current_cart).await?;
    println!("Order completed: {:?}\n", completed_order);
    println!(
        "User's Shopping Cart after order completion (should be empty): {:?}\n",
        services.shopping_carts.get_by_user(&test_user).await?
    );

    println!("Getting order history for user: {}", test_user.email);
    let order_history = services.orders.get_order_history(&test_user).await?;
    if order_history.is_empty() {
        println!("No order history found for {}", test_user.email);
    } else {
        println!("Order History:");
        for order in &order_history {
            println!(
                "  Order ID: {}, Date: {}, Tickets: {}",
                order.id,
                order.order_time,
                order.tickets.len()
            );
            for ticket in &order.tickets {
                println!(
                    "    - Ticket ID: {}, Movie Session ID: {}",
                    ticket.id, ticket.movie_session_id
                );
            }
        }
    }
    println!("\n--- OrderService Testing Complete ---");

    Ok(())
}
