//! Cinema hall entity.

use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, Set};

use crate::error::{CinemaError, Result};
use crate::store::Validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cinema_hall")]
pub struct Model {
    /// Identity assigned on insert.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Number of seats; always positive.
    pub capacity: i32,
    /// Free-form label such as "first hall with capacity 100".
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_session::Entity")]
    MovieSession,
}

impl Related<super::movie_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert payload for [`Model`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCinemaHall {
    pub capacity: i32,
    pub description: Option<String>,
}

impl NewCinemaHall {
    /// Hall with `capacity` seats and no description.
    pub fn new(capacity: i32) -> Self {
        Self {
            capacity,
            description: None,
        }
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for NewCinemaHall {
    fn validate(&self) -> Result<()> {
        if self.capacity <= 0 {
            return Err(CinemaError::Validation(format!(
                "cinema hall capacity must be positive, got {}",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl IntoActiveModel<ActiveModel> for NewCinemaHall {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            capacity: Set(self.capacity),
            description: Set(self.description),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_must_be_positive() {
        assert!(NewCinemaHall::new(0).validate().is_err());
        assert!(NewCinemaHall::new(-5).validate().is_err());
        assert!(NewCinemaHall::new(100).validate().is_ok());
    }
}
