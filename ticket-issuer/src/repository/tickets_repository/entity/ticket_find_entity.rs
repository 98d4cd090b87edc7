use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(FromRow)]
pub struct TicketFindEntity {
    pub id: Uuid,

    pub vatin: String,
    pub first_name: String,
    pub last_name: String,

    pub created_at: OffsetDateTime,
}
