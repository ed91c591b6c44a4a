use chrono::Local;
use sea_orm::prelude::DateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use crate::entity::{order, order_ticket, shopping_cart, ticket, user};
use crate::error::{CinemaError, Result};
use crate::service::shopping_cart::{detach_tickets, pending_tickets, ShoppingCart};

/// A completed purchase with its finalized tickets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    /// Identity of the `orders` row.
    pub id: i32,
    /// Buyer.
    pub user_id: i32,
    /// Local time of completion.
    pub order_time: DateTime,
    /// Finalized tickets in identity order.
    pub tickets: Vec<ticket::Model>,
}

impl Order {
    fn from_parts(order: order::Model, tickets: Vec<ticket::Model>) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            order_time: order.order_time,
            tickets,
        }
    }
}

/// Turns shopping carts into orders and reads a user's order history.
#[derive(Debug, Clone)]
pub struct OrderService {
    conn: DatabaseConnection,
}

impl OrderService {
    /// Creates the service over an open connection pool.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Moves every ticket pending in `cart` into a new order stamped with the
    /// current local time, leaving the cart empty.
    ///
    /// The ticket set is read from the database inside the same transaction,
    /// so the order holds exactly what was pending at that moment. An empty
    /// cart produces an order without tickets.
    pub async fn complete_order(&self, cart: &ShoppingCart) -> Result<Order> {
        let txn = self.conn.begin().await?;

        let cart_row = shopping_cart::Entity::find_by_id(cart.id)
            .one(&txn)
            .await?
            .ok_or_else(|| CinemaError::not_found("shopping cart", cart.id))?;
        let tickets = pending_tickets(&txn, &cart_row).await?;

        let order = order::ActiveModel {
            user_id: Set(cart_row.user_id()),
            order_time: Set(Local::now().naive_local()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if !tickets.is_empty() {
            let links = tickets.iter().map(|t| order_ticket::ActiveModel {
                ticket_id: Set(t.id),
                order_id: Set(order.id),
            });
            order_ticket::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }
        detach_tickets(&txn, cart_row.id).await?;

        txn.commit().await?;

        info!(
            order_id = order.id,
            user_id = order.user_id,
            tickets = tickets.len(),
            "Completed order"
        );
        Ok(Order::from_parts(order, tickets))
    }

    /// All orders of `user`, newest first; orders placed at the same instant
    /// are listed by descending identity.
    pub async fn get_order_history(&self, user: &user::Model) -> Result<Vec<Order>> {
        let orders = order::Entity::find()
            .filter(order::Column::UserId.eq(user.id))
            .order_by_desc(order::Column::OrderTime)
            .order_by_desc(order::Column::Id)
            .all(&self.conn)
            .await?;

        let mut history = Vec::with_capacity(orders.len());
        for order in orders {
            let tickets = order
                .find_related(ticket::Entity)
                .order_by_asc(ticket::Column::Id)
                .all(&self.conn)
                .await?;
            history.push(Order::from_parts(order, tickets));
        }

        debug!(user_id = user.id, orders = history.len(), "Loaded order history");
        Ok(history)
    }
}
