//! Per-user shopping cart row.

use sea_orm::entity::prelude::*;

/// The cart shares its primary key with the owning user, so a user can never
/// hold more than one cart. Pending tickets hang off it through
/// [`shopping_cart_ticket`](super::shopping_cart_ticket).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shopping_cart")]
pub struct Model {
    /// Identity of the owning user; one cart per user.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
}

impl Model {
    /// Owner of the cart, which shares its identity.
    pub fn user_id(&self) -> i32 {
        self.id
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Id",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::shopping_cart_ticket::Entity")]
    ShoppingCartTicket,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::shopping_cart_ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingCartTicket.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        super::shopping_cart_ticket::Relation::Ticket.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::shopping_cart_ticket::Relation::ShoppingCart.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
