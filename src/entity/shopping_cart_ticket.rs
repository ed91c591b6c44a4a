//! Join table holding the pending tickets of a cart.

use sea_orm::entity::prelude::*;

/// Keyed by `ticket_id`: a ticket is pending in at most one cart.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shopping_cart_ticket")]
pub struct Model {
    /// Pending ticket. Being the key, a ticket sits in one cart at most.
    #[sea_orm(primary_key, auto_increment = false)]
    pub ticket_id: i32,
    /// Cart holding the ticket.
    #[sea_orm(indexed)]
    pub shopping_cart_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shopping_cart::Entity",
        from = "Column::ShoppingCartId",
        to = "super::shopping_cart::Column::Id",
        on_delete = "Cascade"
    )]
    ShoppingCart,
    #[sea_orm(
        belongs_to = "super::ticket::Entity",
        from = "Column::TicketId",
        to = "super::ticket::Column::Id",
        on_delete = "Cascade"
    )]
    Ticket,
}

impl Related<super::shopping_cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingCart.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
