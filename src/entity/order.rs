//! Completed order.

use sea_orm::entity::prelude::*;

/// Stored in `orders`; `order` is an SQL keyword.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Identity assigned on insert.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Buyer.
    #[sea_orm(indexed)]
    pub user_id: i32,
    /// Local time the order was completed.
    pub order_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::order_ticket::Entity")]
    OrderTicket,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderTicket.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_ticket::Relation::Ticket.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_ticket::Relation::Order.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
