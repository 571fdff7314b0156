use crate::{
    abstract_trait::{
        auth::AuthServiceTrait,
        hashing::DynHashing,
        jwt::DynJwtService,
        user::{DynUserCommandRepository, DynUserQueryRepository},
    },
    domain::{
        requests::auth::{AuthRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError, validation_error_messages},
};
use async_trait::async_trait;
use tracing::{info, warn};
use validator::Validate;

pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt_config: DynJwtService,
}

pub struct AuthServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hashing: DynHashing,
    pub jwt_config: DynJwtService,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            query,
            command,
            hashing,
            jwt_config,
        } = deps;

        Self {
            query,
            command,
            hashing,
            jwt_config,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("🆕 New user registration attempt: {}", req.email);

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_error_messages(&errors)));
        }

        if self.query.find_by_email(&req.email).await?.is_some() {
            warn!("📦 Email already taken: {}", req.email);
            return Err(ServiceError::AlreadyExists(
                "email is already registered".to_string(),
            ));
        }

        let hashed = self.hashing.hash_password(&req.password).await?;
        let user = self.command.create(&req.email, &hashed).await?;

        info!("✅ User {} registered", user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "user registered".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn login(&self, req: &AuthRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔐 Incoming login request for user: {}", req.email);

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_error_messages(&errors)));
        }

        let user = match self.query.find_by_email(&req.email).await? {
            Some(user) => user,
            None => {
                warn!("🔐 Unknown email on login");
                return Err(ServiceError::InvalidCredentials);
            }
        };

        let matched = self
            .hashing
            .compare_password(&user.password, &req.password)
            .await?;
        if !matched {
            warn!("🔐 Wrong password for user {}", user.user_id);
            return Err(ServiceError::InvalidCredentials);
        }

        let access_token = self.jwt_config.generate_token(user.user_id)?;

        info!("✅ User {} logged in", user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "login successful".to_string(),
            data: TokenResponse {
                access_token,
                token_type: "Bearer".to_string(),
            },
        })
    }

    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self.query.find_by_id(user_id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                warn!("🔍 Profile requested for missing user {user_id}");
                ServiceError::NotFound("user not found".to_string())
            }
            other => ServiceError::Repo(other),
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "user profile".to_string(),
            data: UserResponse::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::user::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
        config::{Hashing, JwtConfig},
        model::user::UserModel,
    };
    use std::sync::Arc;

    struct StubUsers {
        user: Option<UserModel>,
        store_down: bool,
    }

    fn user_row() -> UserModel {
        UserModel {
            user_id: 42,
            email: "user@bank.test".to_string(),
            password: "hash".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for StubUsers {
        async fn find_by_id(&self, _: i32) -> Result<UserModel, RepositoryError> {
            if self.store_down {
                return Err(RepositoryError::Custom("connection refused".to_string()));
            }
            self.user.clone().ok_or(RepositoryError::NotFound)
        }

        async fn find_by_email(&self, _: &str) -> Result<Option<UserModel>, RepositoryError> {
            if self.store_down {
                return Err(RepositoryError::Custom("connection refused".to_string()));
            }
            Ok(self.user.clone())
        }
    }

    #[async_trait]
    impl UserCommandRepositoryTrait for StubUsers {
        async fn create(
            &self,
            email: &str,
            password_hash: &str,
        ) -> Result<UserModel, RepositoryError> {
            Ok(UserModel {
                email: email.to_string(),
                password: password_hash.to_string(),
                ..user_row()
            })
        }
    }

    fn service(repo: StubUsers) -> AuthService {
        let repo = Arc::new(repo);
        AuthService::new(AuthServiceDeps {
            query: repo.clone(),
            command: repo,
            hashing: Arc::new(Hashing::new()),
            jwt_config: Arc::new(JwtConfig::new("test-secret")),
        })
    }

    #[tokio::test]
    async fn get_me_unknown_user_is_not_found() {
        let service = service(StubUsers {
            user: None,
            store_down: false,
        });

        let err = service.get_me(42).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_me_store_fault_is_not_a_missing_user() {
        let service = service(StubUsers {
            user: Some(user_row()),
            store_down: true,
        });

        let err = service.get_me(42).await.unwrap_err();

        // A dead store must surface as a fault, never as a 404.
        assert!(matches!(err, ServiceError::Repo(_)));
    }
}
