#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use cinema_seaorm_store::entity::cinema_hall::{self, NewCinemaHall};
use cinema_seaorm_store::entity::movie::{self, NewMovie};
use cinema_seaorm_store::entity::movie_session::{self, NewMovieSession};
use cinema_seaorm_store::entity::user::{self, NewUser};
use cinema_seaorm_store::{CinemaServices, DatabaseConfig};

/// Fresh, migrated in-memory database per test.
pub async fn setup() -> CinemaServices {
    CinemaServices::connect(&DatabaseConfig::default())
        .await
        .expect("in-memory database should open and migrate")
}

pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub async fn movie(services: &CinemaServices, title: &str) -> movie::Model {
    services.movies.add(NewMovie::new(title)).await.unwrap()
}

pub async fn hall(services: &CinemaServices, capacity: i32) -> cinema_hall::Model {
    services
        .cinema_halls
        .add(NewCinemaHall::new(capacity))
        .await
        .unwrap()
}

pub async fn session(
    services: &CinemaServices,
    movie: &movie::Model,
    hall: &cinema_hall::Model,
    show_time: NaiveDateTime,
) -> movie_session::Model {
    services
        .movie_sessions
        .add(NewMovieSession {
            movie_id: movie.id,
            cinema_hall_id: hall.id,
            show_time,
        })
        .await
        .unwrap()
}

pub async fn user(services: &CinemaServices, email: &str) -> user::Model {
    services
        .users
        .add(NewUser::new(email, "password123"))
        .await
        .unwrap()
}

/// User with a registered cart and a session to book.
pub async fn booking_fixture(
    services: &CinemaServices,
) -> (user::Model, movie_session::Model, movie_session::Model) {
    let movie = movie(services, "Fast and Furious").await;
    let hall = hall(services, 100).await;
    let first = session(services, &movie, &hall, at(day(2030, 5, 10), 18, 0)).await;
    let second = session(services, &movie, &hall, at(day(2030, 5, 11), 20, 30)).await;

    let user = user(services, "test@example.com").await;
    services
        .shopping_carts
        .register_new_shopping_cart(&user)
        .await
        .unwrap();

    (user, first, second)
}
