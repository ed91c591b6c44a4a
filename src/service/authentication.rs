use tracing::{info, warn};

use crate::entity::user::{self, NewUser};
use crate::error::{CinemaError, Result};
use crate::password::verify_password;
use crate::service::{ShoppingCartService, UserService};

const LOGIN_FAILED: &str = "incorrect email or password";

/// Registration and login on top of [`UserService`].
#[derive(Debug, Clone)]
pub struct AuthenticationService {
    users: UserService,
    shopping_carts: ShoppingCartService,
}

impl AuthenticationService {
    /// Wires the service to the user and cart services it delegates to.
    pub fn new(users: UserService, shopping_carts: ShoppingCartService) -> Self {
        Self {
            users,
            shopping_carts,
        }
    }

    /// Creates the account and its empty shopping cart.
    pub async fn register(&self, email: &str, password: &str) -> Result<user::Model> {
        let user = self.users.add(NewUser::new(email, password)).await?;
        self.shopping_carts.register_new_shopping_cart(&user).await?;
        Ok(user)
    }

    /// Returns the account whose credentials match.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<user::Model> {
        match self.users.find_by_email(email).await? {
            Some(user) if verify_password(password, &user.salt, &user.password) => {
                info!(user_id = user.id, "User logged in");
                Ok(user)
            }
            _ => {
                warn!(email = email.trim(), "Rejected login attempt");
                Err(CinemaError::Authentication(LOGIN_FAILED.to_string()))
            }
        }
    }
}
