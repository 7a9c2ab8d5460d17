//! PostgreSQL Chat Store
//!
//! Persists participants and messages to the two tables created by the
//! migrations in `migrations/`. Column names avoid the SQL keywords `from`
//! and `to`; rows are mapped back onto the shared chat types here.
//!
//! Chronological order is the `messages.id` sequence.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::backend::store::{ChatStore, MessageWindow, StoreError};
use crate::shared::{Message, MessageKind, Participant, BROADCAST_RECIPIENT};

/// Chat store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct ParticipantRow {
    name: String,
    last_status: i64,
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    sender: String,
    recipient: String,
    body: String,
    kind: String,
    sent_at: String,
}

impl TryFrom<MessageRow> for Message {
    type Error = StoreError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let kind = row
            .kind
            .parse::<MessageKind>()
            .map_err(|e| StoreError::corrupt(e.to_string()))?;
        Ok(Message::new(row.sender, row.recipient, row.body, kind, row.sent_at))
    }
}

impl PgStore {
    /// Connect to `database_url` and bring the schema up to date
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Wrap an existing pool without running migrations
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ChatStore for PgStore {
    async fn insert_participant(&self, participant: &Participant) -> Result<bool, StoreError> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO participants (name, last_status)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(&participant.name)
        .bind(participant.last_status)
        .execute(&self.pool)
        .await?;

        Ok(inserted.rows_affected() == 1)
    }

    async fn contains_participant(&self, name: &str) -> Result<bool, StoreError> {
        let found: Option<String> =
            sqlx::query_scalar("SELECT name FROM participants WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    async fn touch_participant(&self, name: &str, at_ms: i64) -> Result<bool, StoreError> {
        let updated = sqlx::query("UPDATE participants SET last_status = $2 WHERE name = $1")
            .bind(name)
            .bind(at_ms)
            .execute(&self.pool)
            .await?;

        Ok(updated.rows_affected() > 0)
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, StoreError> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            "SELECT name, last_status FROM participants",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Participant::new(row.name, row.last_status))
            .collect())
    }

    async fn remove_idle_participants(&self, cutoff_ms: i64) -> Result<Vec<String>, StoreError> {
        let names: Vec<String> = sqlx::query_scalar(
            "DELETE FROM participants WHERE last_status <= $1 RETURNING name",
        )
        .bind(cutoff_ms)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn append_message(&self, message: &Message) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO messages (sender, recipient, body, kind, sent_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&message.from)
        .bind(&message.to)
        .bind(&message.text)
        .bind(message.kind.as_str())
        .bind(&message.time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn visible_messages(
        &self,
        viewer: &str,
        window: MessageWindow,
    ) -> Result<Vec<Message>, StoreError> {
        let rows = match window {
            MessageWindow::Full => {
                sqlx::query_as::<_, MessageRow>(
                    r#"
                    SELECT sender, recipient, body, kind, sent_at
                    FROM messages
                    WHERE recipient = $2
                       OR recipient = $1
                       OR sender = $1
                       OR kind = 'message'
                    ORDER BY id ASC
                    "#,
                )
                .bind(viewer)
                .bind(BROADCAST_RECIPIENT)
                .fetch_all(&self.pool)
                .await?
            }
            MessageWindow::Recent(limit) => {
                sqlx::query_as::<_, MessageRow>(
                    r#"
                    SELECT sender, recipient, body, kind, sent_at
                    FROM (
                        SELECT id, sender, recipient, body, kind, sent_at
                        FROM messages
                        WHERE recipient = $3
                           OR recipient = $1
                           OR sender = $1
                           OR kind IN ('message', 'status')
                        ORDER BY id DESC
                        LIMIT $2
                    ) AS recent
                    ORDER BY id ASC
                    "#,
                )
                .bind(viewer)
                .bind(i64::from(limit.get()))
                .bind(BROADCAST_RECIPIENT)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(Message::try_from).collect()
    }
}
