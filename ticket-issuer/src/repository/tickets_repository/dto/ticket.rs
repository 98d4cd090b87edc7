use crate::repository::tickets_repository::entity::TicketFindEntity;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,

    pub vatin: String,
    pub first_name: String,
    pub last_name: String,

    pub created_at: OffsetDateTime,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value.id,
            vatin: value.vatin,
            first_name: value.first_name,
            last_name: value.last_name,
            created_at: value.created_at,
        }
    }
}
