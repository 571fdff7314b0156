use shared::{
    abstract_trait::{
        auth::DynAuthService,
        card::{
            repository::{DynCardCommandRepository, DynCardQueryRepository},
            service::{DynCardCommandService, DynCardQueryService},
        },
        hashing::DynHashing,
        health::DynHealthService,
        jwt::DynJwtService,
        transaction::{
            repository::{DynTransactionCommandRepository, DynTransactionQueryRepository},
            service::{DynTransactionCommandService, DynTransactionQueryService},
        },
        user::{DynUserCommandRepository, DynUserQueryRepository},
    },
    config::{ConnectionPool, Hashing},
    repository::{
        CardCommandRepository, CardQueryRepository, TransactionCommandRepository,
        TransactionQueryRepository, UserCommandRepository, UserQueryRepository,
    },
    service::{
        AuthService, AuthServiceDeps, CardCommandService, CardCommandServiceDeps,
        CardQueryService, HealthService, TariffStore, TransactionCommandService,
        TransactionCommandServiceDeps, TransactionQueryService, TransactionQueryServiceDeps,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub card_query_service: DynCardQueryService,
    pub card_command_service: DynCardCommandService,
    pub transaction_query_service: DynTransactionQueryService,
    pub transaction_command_service: DynTransactionCommandService,
    pub health_service: DynHealthService,
    pub tariff: Arc<TariffStore>,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("card_query_service", &"CardQueryService")
            .field("card_command_service", &"CardCommandService")
            .field("transaction_query_service", &"TransactionQueryService")
            .field("transaction_command_service", &"TransactionCommandService")
            .field("health_service", &"HealthService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, jwt_config: DynJwtService) -> Self {
        let user_query =
            Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;
        let user_command =
            Arc::new(UserCommandRepository::new(pool.clone())) as DynUserCommandRepository;
        let card_query =
            Arc::new(CardQueryRepository::new(pool.clone())) as DynCardQueryRepository;
        let card_command =
            Arc::new(CardCommandRepository::new(pool.clone())) as DynCardCommandRepository;
        let transaction_query = Arc::new(TransactionQueryRepository::new(pool.clone()))
            as DynTransactionQueryRepository;
        let transaction_command = Arc::new(TransactionCommandRepository::new(pool.clone()))
            as DynTransactionCommandRepository;

        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let tariff = Arc::new(TariffStore::new());

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            query: user_query,
            command: user_command,
            hashing,
            jwt_config,
        })) as DynAuthService;

        let card_query_service =
            Arc::new(CardQueryService::new(card_query.clone())) as DynCardQueryService;

        let card_command_service = Arc::new(CardCommandService::new(CardCommandServiceDeps {
            query: card_query.clone(),
            command: card_command,
            tariff: tariff.clone(),
        })) as DynCardCommandService;

        let transaction_query_service =
            Arc::new(TransactionQueryService::new(TransactionQueryServiceDeps {
                card_query: card_query.clone(),
                query: transaction_query,
            })) as DynTransactionQueryService;

        let transaction_command_service = Arc::new(TransactionCommandService::new(
            TransactionCommandServiceDeps {
                card_query,
                command: transaction_command,
            },
        )) as DynTransactionCommandService;

        let health_service = Arc::new(HealthService::new(pool)) as DynHealthService;

        Self {
            auth_service,
            card_query_service,
            card_command_service,
            transaction_query_service,
            transaction_command_service,
            health_service,
            tariff,
        }
    }
}
