//! Registered customer.

use sea_orm::entity::prelude::*;

use crate::error::{CinemaError, Result};
use crate::store::Validate;

/// A customer account. The table is named `users` because `user` is reserved
/// on PostgreSQL.
///
/// `password` holds the hex digest produced by
/// [`hash_password`](crate::password::hash_password) over `salt`; the plain
/// text is never stored.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Identity assigned on insert.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Login name, unique across users.
    #[sea_orm(unique)]
    pub email: String,
    /// Hex digest of `salt || password`.
    pub password: String,
    /// Per-user random salt.
    pub salt: Vec<u8>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::shopping_cart::Entity")]
    ShoppingCart,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::shopping_cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingCart.def()
    }
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

/// Registration payload carrying the plain-text password.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CinemaError::Validation("email must not be empty".to_string()));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(CinemaError::Validation(format!(
                    "'{}' is not a valid email address",
                    email
                )))
            }
        }
        if self.password.is_empty() {
            return Err(CinemaError::Validation(
                "password must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
