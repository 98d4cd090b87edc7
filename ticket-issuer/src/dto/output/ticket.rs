use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: Uuid,
    pub vatin: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: OffsetDateTime,

    /// Shareable link leading to ticket details
    pub url: String,
}
