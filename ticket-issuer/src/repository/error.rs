#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket quota exceeded")]
    QuotaExceeded,

    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("postgres error: {0}")]
    Postgres(#[from] sqlx::Error),
}
