//! Generic persistence for any entity keyed by an `i32` identity.

use std::fmt::Debug;
use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityName, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use tracing::debug;

use crate::entity::{cinema_hall, movie, ticket};
use crate::error::{CinemaError, Result};

/// Checks the invariants of an insert payload before it reaches the database.
pub trait Validate {
    /// Returns [`CinemaError::Validation`] describing the first violated rule.
    fn validate(&self) -> Result<()>;
}

/// Create/read repository over a single Sea-ORM entity.
///
/// Every catalog service in the crate is either this store or a thin wrapper
/// around it. Identities are assigned by the database on insert and grow
/// monotonically per table.
///
/// # Examples
///
/// ```no_run
/// use cinema_seaorm_store::entity::movie::{self, NewMovie};
/// use cinema_seaorm_store::EntityStore;
/// use sea_orm::Database;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let conn = Database::connect("sqlite::memory:").await?;
/// let movies: EntityStore<movie::Entity> = EntityStore::new(conn);
///
/// let added = movies.add(NewMovie::new("Fast and Furious")).await?;
/// assert_eq!(movies.get(added.id).await?.title, "Fast and Furious");
/// # Ok(())
/// # }
/// ```
pub struct EntityStore<E> {
    conn: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> EntityStore<E> {
    /// Creates a store over an open connection pool. The pool is shared, not
    /// copied.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    /// The underlying connection, for queries the store does not cover.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

impl<E> Clone for EntityStore<E> {
    fn clone(&self) -> Self {
        Self::new(self.conn.clone())
    }
}

impl<E: EntityName> Debug for EntityStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("table", &E::default().table_name())
            .finish()
    }
}

impl<E> EntityStore<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + 'static,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    /// Validates and inserts `new`, returning the stored row with its
    /// assigned identity.
    pub async fn add<N>(&self, new: N) -> Result<E::Model>
    where
        N: Validate + IntoActiveModel<E::ActiveModel>,
    {
        new.validate()?;
        let model = new.into_active_model().insert(&self.conn).await?;
        debug!(table = E::default().table_name(), "Inserted row");
        Ok(model)
    }

    /// Fetches the row with identity `id`, or [`CinemaError::NotFound`].
    pub async fn get(&self, id: i32) -> Result<E::Model> {
        let entity = E::default();
        debug!(table = entity.table_name(), id, "Loading row");

        E::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| CinemaError::not_found(entity.table_name(), id))
    }

    /// Whether a row with identity `id` is stored.
    pub async fn exists(&self, id: i32) -> Result<bool> {
        Ok(E::find_by_id(id).one(&self.conn).await?.is_some())
    }

    /// All rows of the table in identity order.
    pub async fn get_all(&self) -> Result<Vec<E::Model>> {
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        Ok(select.all(&self.conn).await?)
    }
}

/// Store for [`movie`] rows.
pub type MovieService = EntityStore<movie::Entity>;

/// Store for [`cinema_hall`] rows.
pub type CinemaHallService = EntityStore<cinema_hall::Entity>;

/// Store for [`ticket`] rows created outside the cart workflow.
pub type TicketService = EntityStore<ticket::Entity>;
