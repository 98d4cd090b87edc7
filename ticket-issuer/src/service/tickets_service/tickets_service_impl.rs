use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, Ticket, TicketsRepository, MAX_TICKETS_PER_VATIN},
};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const VATIN_LEN: usize = 11;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(config: TicketsServiceConfig, repository: Arc<dyn TicketsRepository>) -> Self {
        Self { config, repository }
    }

    fn validate_create_ticket(ticket: &input::Ticket) -> Result<(), Error> {
        Self::validate_vatin(&ticket.taxpayer_id)?;
        Self::validate_name(&ticket.first_name)?;
        Self::validate_name(&ticket.last_name)?;

        Ok(())
    }

    fn validate_vatin(vatin: &str) -> Result<(), Error> {
        if vatin.len() != VATIN_LEN || !vatin.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidTaxpayerId);
        }

        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), Error> {
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidName);
        }

        Ok(())
    }

    fn ticket_url(&self, id: Uuid) -> String {
        format!("{}/ticket/{id}", self.config.base_url)
    }

    fn to_output(&self, ticket: Ticket) -> output::Ticket {
        output::Ticket {
            url: self.ticket_url(ticket.id),
            id: ticket.id,
            vatin: ticket.vatin,
            first_name: ticket.first_name,
            last_name: ticket.last_name,
            created_at: ticket.created_at,
        }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        Self::validate_create_ticket(&ticket)?;

        let id = Uuid::new_v4();
        let ticket = self
            .repository
            .insert(
                id,
                &ticket.taxpayer_id,
                &ticket.first_name,
                &ticket.last_name,
            )
            .await
            .map_err(|err| match err {
                repository::Error::QuotaExceeded => Error::QuotaExceeded {
                    max: MAX_TICKETS_PER_VATIN,
                },
                err => Error::Database(err),
            })?;
        tracing::info!(%id, "created ticket");

        Ok(self.to_output(ticket))
    }

    async fn find_ticket(&self, id: &str) -> Result<output::Ticket, Error> {
        tracing::info!(id, "finding ticket");

        let id = Uuid::parse_str(id).map_err(|_| Error::TicketNotFound)?;
        let ticket = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotFound)?;

        Ok(self.to_output(ticket))
    }

    async fn count_tickets(&self) -> Result<u64, Error> {
        let count = self.repository.count().await?;
        tracing::debug!(count, "counted tickets");

        Ok(count)
    }
}
