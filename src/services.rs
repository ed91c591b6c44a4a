//! Explicit construction of every service over one database connection.

use sea_orm::DatabaseConnection;

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::service::{
    AuthenticationService, MovieSessionService, OrderService, ShoppingCartService, UserService,
};
use crate::store::{CinemaHallService, EntityStore, MovieService, TicketService};

/// The full set of cinema services, wired by hand.
///
/// ```no_run
/// use cinema_seaorm_store::{CinemaServices, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let services = CinemaServices::connect(&DatabaseConfig::from_env()).await?;
/// let movies = services.movies.get_all().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CinemaServices {
    /// Movie catalog.
    pub movies: MovieService,
    /// Cinema halls.
    pub cinema_halls: CinemaHallService,
    /// Screenings and the per-day lookup.
    pub movie_sessions: MovieSessionService,
    /// Raw ticket rows, including tickets outside any cart.
    pub tickets: TicketService,
    /// Customer accounts.
    pub users: UserService,
    /// Carts and pending tickets.
    pub shopping_carts: ShoppingCartService,
    /// Cart-to-order conversion and history.
    pub orders: OrderService,
    /// Registration and login.
    pub authentication: AuthenticationService,
}

impl CinemaServices {
    /// Builds every service over one shared connection pool. The schema is
    /// expected to exist already.
    pub fn new(conn: DatabaseConnection) -> Self {
        let users = UserService::new(conn.clone());
        let shopping_carts = ShoppingCartService::new(conn.clone());

        Self {
            movies: EntityStore::new(conn.clone()),
            cinema_halls: EntityStore::new(conn.clone()),
            movie_sessions: MovieSessionService::new(conn.clone()),
            tickets: EntityStore::new(conn.clone()),
            authentication: AuthenticationService::new(users.clone(), shopping_carts.clone()),
            orders: OrderService::new(conn),
            users,
            shopping_carts,
        }
    }

    /// Opens the database described by `config` and, with the `migration`
    /// feature, brings its schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let conn = config.connect().await?;

        #[cfg(feature = "migration")]
        {
            use crate::migration::{Migrator, MigratorTrait};
            Migrator::up(&conn, None).await?;
        }

        Ok(Self::new(conn))
    }
}
