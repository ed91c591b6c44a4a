use sea_orm::entity::prelude::*;

/// Finalized tickets of an order. Keyed by `ticket_id`, so a ticket belongs
/// to at most one order and never leaves it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_ticket")]
pub struct Model {
    /// Finalized ticket. Being the key, a ticket belongs to one order at most.
    #[sea_orm(primary_key, auto_increment = false)]
    pub ticket_id: i32,
    /// Order holding the ticket.
    #[sea_orm(indexed)]
    pub order_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::ticket::Entity",
        from = "Column::TicketId",
        to = "super::ticket::Column::Id"
    )]
    Ticket,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
