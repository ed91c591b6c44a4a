use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use tracing::{debug, info};

use crate::entity::user::{self, NewUser};
use crate::error::{CinemaError, Result};
use crate::password::{generate_salt, hash_password};
use crate::store::{EntityStore, Validate};

/// Customer accounts. Passwords are salted and hashed before they are stored.
#[derive(Debug, Clone)]
pub struct UserService {
    users: EntityStore<user::Entity>,
}

impl UserService {
    /// Creates the service over an open connection pool.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            users: EntityStore::new(conn),
        }
    }

    /// Stores a new user.
    ///
    /// Fails with [`CinemaError::Validation`] on a malformed payload or when
    /// the email is already registered.
    pub async fn add(&self, new: NewUser) -> Result<user::Model> {
        new.validate()?;
        let email = new.email.trim().to_string();

        if self.find_by_email(&email).await?.is_some() {
            return Err(email_taken(&email));
        }

        let salt = generate_salt();
        let user = user::ActiveModel {
            email: Set(email.clone()),
            password: Set(hash_password(&new.password, &salt)),
            salt: Set(salt),
            ..Default::default()
        }
        .insert(self.users.connection())
        .await
        .map_err(|err| match err.sql_err() {
            // Lost a race with a concurrent registration of the same email.
            Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(&email),
            _ => CinemaError::from(err),
        })?;

        info!(user_id = user.id, "Registered user");
        Ok(user)
    }

    /// Fetches a user by identity, or [`CinemaError::NotFound`].
    pub async fn get(&self, id: i32) -> Result<user::Model> {
        self.users.get(id).await
    }

    /// Looks a user up by email. Surrounding whitespace is ignored; the match
    /// is otherwise exact.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        let email = email.trim();
        debug!(email, "Looking up user by email");

        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.users.connection())
            .await?)
    }
}

fn email_taken(email: &str) -> CinemaError {
    CinemaError::Validation(format!("email '{}' is already registered", email))
}
