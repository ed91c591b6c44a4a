//! Movie catalog entry.

use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, Set};

use crate::error::{CinemaError, Result};
use crate::store::Validate;

/// A movie that can be scheduled in a cinema hall.
///
/// | Column      | Type               |
/// |-------------|--------------------|
/// | id          | INTEGER (PK, auto) |
/// | title       | TEXT               |
/// | description | TEXT NULL          |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    /// Identity assigned on insert.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display title; never blank.
    pub title: String,
    /// Optional synopsis.
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
pub struct NewMovie {
    pub title: String,
    pub description: Option<String>,
}

impl NewMovie {
    /// Movie titled `title` without a description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for NewMovie {
    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CinemaError::Validation(
                "movie title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl IntoActiveModel<ActiveModel> for NewMovie {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title),
            description: Set(self.description),
            ..Default::default()
        }
    }
}
