//! Account signup and local credential login.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, SignupParam, User},
    util::password,
};

/// Service providing business logic for local accounts.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account from a signup request.
    ///
    /// Rejects usernames and emails that are already in use, hashes the
    /// password with Argon2id, and stores the account.
    ///
    /// # Arguments
    /// - `param` - Signup fields with the raw password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Username or email already taken
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn signup(&self, param: SignupParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo
            .username_or_email_taken(&param.username, &param.email)
            .await?
        {
            return Err(AppError::BadRequest(
                "Username or email is already in use".to_string(),
            ));
        }

        let password_hash = password::hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                name: param.name,
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Verifies a username/password pair against the stored hash.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response does not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `username` - Login name
    /// - `password` - Raw password to verify
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    /// - `Err(AppError)` - Hash parsing or database failure
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(entity) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(entity))
    }
}

#[cfg(test)]
mod tests {
    use test_utils::builder::TestBuilder;

    use super::*;

    fn signup_param() -> SignupParam {
        SignupParam {
            username: "newstudent".to_string(),
            email: "newstudent@example.com".to_string(),
            name: "New Student".to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }

    /// Tests the signup and login round trip.
    ///
    /// Expected: signup creates the account and the same credentials log in
    #[tokio::test]
    async fn signup_then_login_succeeds() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AccountService::new(db);
        let created = service.signup(signup_param()).await?;

        assert_eq!(created.username, "newstudent");
        assert!(!created.is_admin);

        let logged_in = service.login("newstudent", "hunter2hunter2").await?;
        assert_eq!(logged_in.id, created.id);

        Ok(())
    }

    /// Tests that a wrong password is rejected.
    ///
    /// Expected: Err(InvalidCredentials)
    #[tokio::test]
    async fn login_rejects_wrong_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AccountService::new(db);
        service.signup(signup_param()).await?;

        let result = service.login("newstudent", "wrong password").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    /// Tests that an unknown username is rejected like a wrong password.
    ///
    /// Expected: Err(InvalidCredentials)
    #[tokio::test]
    async fn login_rejects_unknown_username() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AccountService::new(db);
        let result = service.login("nobody", "hunter2hunter2").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    /// Tests duplicate signup rejection.
    ///
    /// Expected: Err(BadRequest) on the second signup with the same username
    #[tokio::test]
    async fn signup_rejects_duplicate_username() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AccountService::new(db);
        service.signup(signup_param()).await?;

        let mut duplicate = signup_param();
        duplicate.email = "other@example.com".to_string();
        let result = service.signup(duplicate).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
