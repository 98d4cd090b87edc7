use super::ApplicationEnv;
use crate::{
    auth::{IdentityProvider, OidcIdentityProvider, OidcIdentityProviderConfig},
    repository::TicketsRepositoryImpl,
    service::{
        qr_code_service::{PngQrCodeService, QrCodeService},
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
    },
};
use axum::extract::FromRef;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub qr_code_service: Arc<dyn QrCodeService>,
    pub identity_provider: Arc<dyn IdentityProvider>,
}

pub struct ApplicationStateToClose {
    pub db_pool: PgPool,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!(host = %env.db_host, port = env.db_port, "connecting to database");
    let connect_options = PgConnectOptions::new()
        .host(&env.db_host)
        .port(env.db_port)
        .username(&env.db_user)
        .password(&env.db_password)
        .database(&env.db_name);
    let db_pool = PgPoolOptions::new()
        .max_connections(env.db_max_connections)
        .connect_with(connect_options)
        .await?;

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db_pool.clone()).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let config = TicketsServiceConfig {
        base_url: env.base_url.clone(),
    };
    let tickets_service = TicketsServiceImpl::new(config, tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    let qr_code_service = Arc::new(PngQrCodeService::new());

    let config = OidcIdentityProviderConfig {
        base_url: env.base_url.clone(),
        issuer_base_url: env.oidc_issuer_base_url.clone(),
        client_id: env.oidc_client_id.clone(),
        jwt_algorithms: env.jwt_algorithms.clone(),
        jwt_key: env.jwt_key.clone(),
    };
    let identity_provider = Arc::new(OidcIdentityProvider::new(config)?);

    Ok((
        ApplicationState {
            tickets_service,
            qr_code_service,
            identity_provider,
        },
        ApplicationStateToClose { db_pool },
    ))
}
