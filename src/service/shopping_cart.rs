use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use crate::entity::ticket::NewTicket;
use crate::entity::{movie_session, shopping_cart, shopping_cart_ticket, ticket, user};
use crate::error::{CinemaError, Result};
use crate::store::Validate;

/// A user's cart together with its pending tickets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingCart {
    /// Same value as `user_id`; carts share the owner's identity.
    pub id: i32,
    /// Owner of the cart.
    pub user_id: i32,
    /// Pending tickets in identity order.
    pub tickets: Vec<ticket::Model>,
}

impl ShoppingCart {
    fn from_parts(cart: shopping_cart::Model, tickets: Vec<ticket::Model>) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id(),
            tickets,
        }
    }

    /// True when no ticket is pending.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Owns the cart side of the ticket lifecycle: creating tickets for a session
/// and holding them until an order takes them over.
///
/// Carts are never created implicitly. [`get_by_user`](Self::get_by_user)
/// returns `None` and [`add_session`](Self::add_session) fails with
/// [`CinemaError::NotFound`] until
/// [`register_new_shopping_cart`](Self::register_new_shopping_cart) ran for
/// the user.
#[derive(Debug, Clone)]
pub struct ShoppingCartService {
    conn: DatabaseConnection,
}

impl ShoppingCartService {
    /// Creates the service over an open connection pool.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Creates the user's empty cart. A second call returns the existing cart
    /// unchanged.
    ///
    /// Fails with [`CinemaError::NotFound`] when `user` was never stored.
    pub async fn register_new_shopping_cart(&self, user: &user::Model) -> Result<ShoppingCart> {
        if let Some(existing) = self.get_by_user(user).await? {
            debug!(user_id = user.id, "Shopping cart already registered");
            return Ok(existing);
        }

        if user::Entity::find_by_id(user.id)
            .one(&self.conn)
            .await?
            .is_none()
        {
            return Err(CinemaError::not_found("user", user.id));
        }

        let cart = shopping_cart::ActiveModel { id: Set(user.id) }
            .insert(&self.conn)
            .await?;

        info!(user_id = user.id, "Registered shopping cart");
        Ok(ShoppingCart::from_parts(cart, Vec::new()))
    }

    /// The user's cart with its pending tickets, or `None` before
    /// [`register_new_shopping_cart`](Self::register_new_shopping_cart).
    pub async fn get_by_user(&self, user: &user::Model) -> Result<Option<ShoppingCart>> {
        let Some(cart) = shopping_cart::Entity::find_by_id(user.id)
            .one(&self.conn)
            .await?
        else {
            return Ok(None);
        };

        let tickets = pending_tickets(&self.conn, &cart).await?;
        Ok(Some(ShoppingCart::from_parts(cart, tickets)))
    }

    /// Issues a ticket for `session` to `user` and puts it in the user's cart.
    ///
    /// Fails with [`CinemaError::NotFound`] when the user has no cart or the
    /// session does not exist; nothing is written in either case.
    pub async fn add_session(
        &self,
        session: &movie_session::Model,
        user: &user::Model,
    ) -> Result<ticket::Model> {
        let new_ticket = NewTicket {
            movie_session_id: session.id,
            user_id: user.id,
        };
        new_ticket.validate()?;

        let txn = self.conn.begin().await?;

        let cart = shopping_cart::Entity::find_by_id(user.id)
            .one(&txn)
            .await?
            .ok_or_else(|| CinemaError::not_found("shopping cart of user", user.id))?;

        if movie_session::Entity::find_by_id(session.id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(CinemaError::not_found("movie session", session.id));
        }

        let ticket = new_ticket.into_active_model().insert(&txn).await?;

        shopping_cart_ticket::ActiveModel {
            ticket_id: Set(ticket.id),
            shopping_cart_id: Set(cart.id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            user_id = user.id,
            ticket_id = ticket.id,
            movie_session_id = session.id,
            "Added ticket to shopping cart"
        );
        Ok(ticket)
    }

    /// Empties the cart. Detached tickets stay in the `ticket` table.
    pub async fn clear(&self, cart: &ShoppingCart) -> Result<()> {
        let detached = detach_tickets(&self.conn, cart.id).await?;
        info!(shopping_cart_id = cart.id, detached, "Cleared shopping cart");
        Ok(())
    }
}

/// Tickets currently linked to `cart`, in identity order.
pub(crate) async fn pending_tickets<C>(
    db: &C,
    cart: &shopping_cart::Model,
) -> Result<Vec<ticket::Model>>
where
    C: ConnectionTrait,
{
    Ok(cart
        .find_related(ticket::Entity)
        .order_by_asc(ticket::Column::Id)
        .all(db)
        .await?)
}

/// Removes every pending-ticket link of the cart, returning how many went.
pub(crate) async fn detach_tickets<C>(db: &C, cart_id: i32) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = shopping_cart_ticket::Entity::delete_many()
        .filter(shopping_cart_ticket::Column::ShoppingCartId.eq(cart_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
