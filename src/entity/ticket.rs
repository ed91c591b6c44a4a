//! Ticket for one seat at a movie session.
//!
//! A ticket is created unattached, becomes pending once linked to a shopping
//! cart and is finalized when an order takes it over.

use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, Set};

use crate::error::{CinemaError, Result};
use crate::store::Validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    /// Identity assigned on insert.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Screening the ticket admits to.
    pub movie_session_id: i32,
    /// Ticket holder.
    #[sea_orm(indexed)]
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie_session::Entity",
        from = "Column::MovieSessionId",
        to = "super::movie_session::Column::Id"
    )]
    MovieSession,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::movie_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieSession.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert payload for [`Model`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewTicket {
    pub movie_session_id: i32,
    pub user_id: i32,
}

impl Validate for NewTicket {
    fn validate(&self) -> Result<()> {
        if self.movie_session_id <= 0 || self.user_id <= 0 {
            return Err(CinemaError::Validation(format!(
                "ticket must reference a persisted session and user (session {}, user {})",
                self.movie_session_id, self.user_id
            )));
        }
        Ok(())
    }
}

impl IntoActiveModel<ActiveModel> for NewTicket {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            movie_session_id: Set(self.movie_session_id),
            user_id: Set(self.user_id),
            ..Default::default()
        }
    }
}
