use super::Ticket;
use crate::repository;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket. Creation time is assigned by the database.
    ///
    /// Quota check and insert are atomic, concurrent inserts
    /// for the same VATIN never exceed [super::MAX_TICKETS_PER_VATIN].
    ///
    /// ### Errors
    /// - [repository::Error::QuotaExceeded] when VATIN already has
    ///   [super::MAX_TICKETS_PER_VATIN] tickets
    /// - [repository::Error::InsertUniqueViolation] when id is already taken
    ///
    async fn insert(
        &self,
        id: Uuid,
        vatin: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Ticket, repository::Error>;

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Counts all tickets ever issued
    ///
    async fn count(&self) -> Result<u64, repository::Error>;
}
