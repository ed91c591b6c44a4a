use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::entity::movie_session::{self, NewMovieSession};
use crate::entity::{cinema_hall, movie};
use crate::error::{CinemaError, Result};
use crate::store::EntityStore;

/// Schedules screenings and answers "what is on for this movie that day".
#[derive(Debug, Clone)]
pub struct MovieSessionService {
    sessions: EntityStore<movie_session::Entity>,
    movies: EntityStore<movie::Entity>,
    halls: EntityStore<cinema_hall::Entity>,
}

impl MovieSessionService {
    /// Creates the service over an open connection pool.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            sessions: EntityStore::new(conn.clone()),
            movies: EntityStore::new(conn.clone()),
            halls: EntityStore::new(conn),
        }
    }

    /// Inserts a session after checking that its movie and hall exist.
    pub async fn add(&self, new: NewMovieSession) -> Result<movie_session::Model> {
        if !self.movies.exists(new.movie_id).await? {
            return Err(CinemaError::Validation(format!(
                "movie session references unknown movie {}",
                new.movie_id
            )));
        }
        if !self.halls.exists(new.cinema_hall_id).await? {
            return Err(CinemaError::Validation(format!(
                "movie session references unknown cinema hall {}",
                new.cinema_hall_id
            )));
        }

        self.sessions.add(new).await
    }

    /// Fetches a session by identity, or [`CinemaError::NotFound`].
    pub async fn get(&self, id: i32) -> Result<movie_session::Model> {
        self.sessions.get(id).await
    }

    /// Every scheduled session in identity order.
    pub async fn get_all(&self) -> Result<Vec<movie_session::Model>> {
        self.sessions.get_all().await
    }

    /// Sessions of `movie_id` whose show time falls on `date`, in identity
    /// order.
    ///
    /// Only the calendar day is compared: a session earlier today is still
    /// returned for today's date.
    pub async fn find_available_sessions(
        &self,
        movie_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<movie_session::Model>> {
        let day_start = date.and_time(NaiveTime::MIN);

        let mut query = movie_session::Entity::find()
            .filter(movie_session::Column::MovieId.eq(movie_id))
            .filter(movie_session::Column::ShowTime.gte(day_start));

        // Absent only for the last representable day.
        if let Some(next_day) = date.succ_opt() {
            query = query.filter(movie_session::Column::ShowTime.lt(next_day.and_time(NaiveTime::MIN)));
        }

        let sessions = query
            .order_by_asc(movie_session::Column::Id)
            .all(self.sessions.connection())
            .await?;

        debug!(movie_id, %date, found = sessions.len(), "Looked up available sessions");
        Ok(sessions)
    }
}
