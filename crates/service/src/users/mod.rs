//! Users: three-layer architecture (domain, repository, service).
//!
//! Registration enforces email uniqueness; authentication verifies an argon2
//! hash, never a stored plain-text secret.

pub mod domain;
pub mod password;
pub mod repository;
pub mod service;
pub mod repo {
    pub mod seaorm;
}

pub use service::UserService;

pub const EMAIL_ALREADY_REGISTERED: &str = "Já existe um usuário cadastrado com este email.";
pub const USER_NOT_FOUND_FOR_EMAIL: &str = "Usuário não encontrado para o email informado.";
pub const INVALID_PASSWORD: &str = "Senha inválida.";
