use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Issues new ticket.
    ///
    /// ### Returns
    /// created ticket with its shareable link
    ///
    /// ### Errors
    /// - [Error::InvalidTaxpayerId] when taxpayer ID is not exactly 11 digits
    /// - [Error::InvalidName] when first or last name is empty
    ///   or contains anything but letters
    /// - [Error::QuotaExceeded] when taxpayer ID already reached its ticket quota
    ///
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<output::Ticket, Error>;

    ///
    /// Finds ticket by its public identifier
    ///
    /// ### Errors
    /// - [Error::TicketNotFound] when
    ///     - identifier is not a valid ticket identifier
    ///     - ticket with identifier does not exist
    ///
    async fn find_ticket(&self, id: &str) -> Result<output::Ticket, Error>;

    ///
    /// Counts all issued tickets
    ///
    async fn count_tickets(&self) -> Result<u64, Error>;
}
