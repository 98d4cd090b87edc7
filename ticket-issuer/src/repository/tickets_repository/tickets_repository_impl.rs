use super::{entity::TicketFindEntity, Ticket, TicketsRepository, MAX_TICKETS_PER_VATIN};
use crate::repository::{self, Error};
use axum::async_trait;
use sqlx::{Executor, PgPool};
use uuid::Uuid;

const TICKETS: &str = "tickets";
const TAXPAYER_QUOTAS: &str = "taxpayer_quotas";

pub struct TicketsRepositoryImpl {
    pool: PgPool,
}

impl TicketsRepositoryImpl {
    pub async fn new(pool: PgPool) -> Result<Self, sqlx::Error> {
        tracing::debug!(table = TICKETS, "creating table");
        pool.execute(
            r#"
            CREATE TABLE IF NOT EXISTS tickets (
                id          UUID PRIMARY KEY,
                vatin       TEXT NOT NULL CHECK (vatin ~ '^[0-9]{11}$'),
                first_name  TEXT NOT NULL,
                last_name   TEXT NOT NULL,
                created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .await?;
        pool.execute("CREATE INDEX IF NOT EXISTS tickets_vatin_idx ON tickets (vatin)")
            .await?;

        tracing::debug!(table = TAXPAYER_QUOTAS, "creating table");
        pool.execute(
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS taxpayer_quotas (
                    vatin   TEXT PRIMARY KEY,
                    issued  INTEGER NOT NULL CHECK (issued BETWEEN 1 AND {MAX_TICKETS_PER_VATIN})
                )
                "#
            )
            .as_str(),
        )
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        id: Uuid,
        vatin: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Ticket, repository::Error> {
        let mut transaction = self.pool.begin().await?;

        // Row lock taken here serializes concurrent inserts for the same vatin
        let issued = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO taxpayer_quotas (vatin, issued) VALUES ($1, 1)
            ON CONFLICT (vatin) DO UPDATE SET issued = taxpayer_quotas.issued + 1
            WHERE taxpayer_quotas.issued < $2
            RETURNING issued
            "#,
        )
        .bind(vatin)
        .bind(MAX_TICKETS_PER_VATIN)
        .fetch_optional(&mut *transaction)
        .await?;

        // dropped transaction is rolled back
        let Some(issued) = issued else {
            return Err(Error::QuotaExceeded);
        };
        tracing::debug!(issued, "reserved quota");

        let entity = sqlx::query_as::<_, TicketFindEntity>(
            r#"
            INSERT INTO tickets (id, vatin, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, vatin, first_name, last_name, created_at
            "#,
        )
        .bind(id)
        .bind(vatin)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&mut *transaction)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db_err) = &err {
                if db_err.is_unique_violation() {
                    return Error::InsertUniqueViolation;
                }
            }
            Error::Postgres(err)
        })?;

        transaction.commit().await?;

        Ok(Ticket::from(entity))
    }

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error> {
        let ticket = sqlx::query_as::<_, TicketFindEntity>(
            "SELECT id, vatin, first_name, last_name, created_at FROM tickets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Ticket::from);

        Ok(ticket)
    }

    async fn count(&self) -> Result<u64, repository::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tickets")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}
