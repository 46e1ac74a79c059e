use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::domain::{NewUser, RegisterInput, User};
use super::password::{hash_password, verify_password};
use super::repository::UserRepository;
use super::{EMAIL_ALREADY_REGISTERED, INVALID_PASSWORD, USER_NOT_FOUND_FOR_EMAIL};
use crate::errors::ServiceError;

/// User business service independent of web framework
pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::users::{UserService, repository::mock::MockUserRepository};
    /// use service::users::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// let input = RegisterInput { name: "Fulano".into(), email: "usuario@email.com".into(), password: "senha".into() };
    /// let user = tokio_test::block_on(svc.register_user(input)).unwrap();
    /// assert_eq!(user.email, "usuario@email.com");
    /// assert_ne!(user.password_hash, "senha");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register_user(&self, input: RegisterInput) -> Result<User, ServiceError> {
        self.validate_email_uniqueness(&input.email).await?;

        let password_hash = hash_password(&input.password)?;
        let user = self.repo
            .save(NewUser { name: input.name, email: input.email, password_hash })
            .await?;
        info!(user_id = %user.id, email = %user.email, "user_registered");
        Ok(user)
    }

    /// Fails with a business-rule error when the email is already taken.
    pub async fn validate_email_uniqueness(&self, email: &str) -> Result<(), ServiceError> {
        if self.repo.exists_by_email(email).await? {
            debug!(%email, "email already registered");
            return Err(ServiceError::business(EMAIL_ALREADY_REGISTERED));
        }
        Ok(())
    }

    /// Check an email/password pair and return the matching user.
    ///
    /// # Examples
    /// ```
    /// use service::users::{UserService, repository::mock::MockUserRepository};
    /// use service::users::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// let input = RegisterInput { name: "N".into(), email: "u@e.com".into(), password: "123".into() };
    /// let _ = tokio_test::block_on(svc.register_user(input));
    /// let user = tokio_test::block_on(svc.authenticate("u@e.com", "123")).unwrap();
    /// assert_eq!(user.email, "u@e.com");
    /// assert!(tokio_test::block_on(svc.authenticate("u@e.com", "321")).is_err());
    /// ```
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        let user = self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::authentication(USER_NOT_FOUND_FOR_EMAIL))?;

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "password mismatch");
            return Err(ServiceError::authentication(INVALID_PASSWORD));
        }
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
        self.repo.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repository::mock::MockUserRepository;

    fn input(email: &str, password: &str) -> RegisterInput {
        RegisterInput { name: "usuario".into(), email: email.into(), password: password.into() }
    }

    fn stored_user(email: &str, password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "usuario".into(),
            email: email.into(),
            password_hash: hash_password(password).unwrap(),
        }
    }

    #[tokio::test]
    async fn registers_user_with_hashed_password() {
        let repo = Arc::new(MockUserRepository::default());
        let svc = UserService::new(repo.clone());

        let user = svc.register_user(input("usuario@email.com", "senha")).await.unwrap();

        assert_eq!(user.email, "usuario@email.com");
        assert!(user.password_hash.starts_with("$argon2"));
        assert_eq!(repo.save_calls(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_never_reaches_save() {
        let repo = Arc::new(MockUserRepository::default().with_user(stored_user("usuario@email.com", "x")));
        let svc = UserService::new(repo.clone());

        let err = svc.register_user(input("usuario@email.com", "senha")).await.unwrap_err();

        assert_eq!(err, ServiceError::BusinessRule("Já existe um usuário cadastrado com este email.".into()));
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn email_uniqueness_passes_for_unknown_email() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        assert!(svc.validate_email_uniqueness("usuario@email.com").await.is_ok());
    }

    #[tokio::test]
    async fn email_uniqueness_fails_for_registered_email() {
        let repo = MockUserRepository::default().with_user(stored_user("usuario@email.com", "x"));
        let svc = UserService::new(Arc::new(repo));
        let err = svc.validate_email_uniqueness("usuario@email.com").await.unwrap_err();
        assert!(matches!(err, ServiceError::BusinessRule(_)));
    }

    #[tokio::test]
    async fn authenticate_returns_user_on_matching_password() {
        let stored = stored_user("usuario@email.com", "senha");
        let svc = UserService::new(Arc::new(MockUserRepository::default().with_user(stored.clone())));

        let user = svc.authenticate("usuario@email.com", "senha").await.unwrap();
        assert_eq!(user, stored);
    }

    #[tokio::test]
    async fn authenticate_unknown_email() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        let err = svc.authenticate("usuario@email.com", "senha").await.unwrap_err();
        assert_eq!(err, ServiceError::Authentication("Usuário não encontrado para o email informado.".into()));
    }

    #[tokio::test]
    async fn authenticate_wrong_password() {
        let stored = stored_user("usuario@email.com", "senha");
        let svc = UserService::new(Arc::new(MockUserRepository::default().with_user(stored)));
        let err = svc.authenticate("usuario@email.com", "123").await.unwrap_err();
        assert_eq!(err, ServiceError::Authentication("Senha inválida.".into()));
    }

    #[tokio::test]
    async fn works_behind_a_trait_object() {
        let repo: Arc<dyn UserRepository> = Arc::new(MockUserRepository::default());
        let svc: UserService<dyn UserRepository> = UserService::new(repo);
        let user = svc.register_user(input("dyn@email.com", "senha")).await.unwrap();
        assert_eq!(svc.find_by_id(user.id).await.unwrap(), Some(user));
    }
}
