//! A scheduled screening of a movie in a hall.

use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, Set};

use crate::error::Result;
use crate::store::Validate;

/// `show_time` is a naive local date-time; availability lookups compare its
/// calendar day only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_session")]
pub struct Model {
    /// Identity assigned on insert.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Movie being screened.
    #[sea_orm(indexed)]
    pub movie_id: i32,
    /// Hall the screening takes place in.
    pub cinema_hall_id: i32,
    /// Local start time, without time zone.
    pub show_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::cinema_hall::Entity",
        from = "Column::CinemaHallId",
        to = "super::cinema_hall::Column::Id"
    )]
    CinemaHall,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::cinema_hall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CinemaHall.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert payload for [`Model`]. Both references must name stored rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovieSession {
    pub movie_id: i32,
    pub cinema_hall_id: i32,
    pub show_time: DateTime,
}

// Referential checks need the database and live in `MovieSessionService::add`.
impl Validate for NewMovieSession {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl IntoActiveModel<ActiveModel> for NewMovieSession {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            movie_id: Set(self.movie_id),
            cinema_hall_id: Set(self.cinema_hall_id),
            show_time: Set(self.show_time),
            ..Default::default()
        }
    }
}
