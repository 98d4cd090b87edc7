use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_key};
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    /// Public address of the application without trailing slash
    pub base_url: String,

    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,

    pub max_http_content_len: usize,

    /// Issuer base URL without trailing slash
    pub oidc_issuer_base_url: String,
    pub oidc_client_id: String,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_ISSUER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_ISSUER_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKET_ISSUER_BIND_ADDRESS")?.parse()?;
        let base_url = Self::env_var("TICKET_ISSUER_BASE_URL")?;
        let base_url = base_url.trim_end_matches('/').to_string();
        let db_host = Self::env_var("TICKET_ISSUER_DB_HOST")?;
        let db_port = Self::env_var("TICKET_ISSUER_DB_PORT")?.parse()?;
        let db_user = Self::env_var("TICKET_ISSUER_DB_USER")?;
        let db_password = Self::env_var("TICKET_ISSUER_DB_PASSWORD")?;
        let db_name = Self::env_var("TICKET_ISSUER_DB_NAME")?;
        let db_max_connections = Self::env_var("TICKET_ISSUER_DB_MAX_CONNECTIONS")?.parse()?;
        let max_http_content_len = Self::env_var("TICKET_ISSUER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let oidc_issuer_base_url = Self::env_var("TICKET_ISSUER_OIDC_ISSUER_BASE_URL")?;
        let oidc_issuer_base_url = oidc_issuer_base_url.trim_end_matches('/').to_string();
        let oidc_client_id = Self::env_var("TICKET_ISSUER_OIDC_CLIENT_ID")?;
        let jwt_algorithms = parse_jwt_algorithms(Self::env_var("TICKET_ISSUER_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "TICKET_ISSUER_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, Self::env_var("TICKET_ISSUER_JWT_KEY")?)?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            base_url,
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            db_max_connections,
            max_http_content_len,
            oidc_issuer_base_url,
            oidc_client_id,
            jwt_algorithms,
            jwt_key,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
