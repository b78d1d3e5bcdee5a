/**
 * SQLite Store
 *
 * This module persists participants and messages with sqlx on SQLite.
 * The schema lives in `migrations/` and is applied when the store is
 * opened.
 *
 * # Tables
 *
 * - `participants(id, name UNIQUE, last_status)`
 * - `messages(seq, sender, recipient, text, kind, time)`
 *
 * `seq` is an autoincrement key, so `ORDER BY seq` is insertion order.
 */

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;

use super::{ChatStore, StoreError};
use crate::shared::{Message, MessageKind, Participant};

/// Pool size for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

#[derive(sqlx::FromRow)]
struct ParticipantRow {
    name: String,
    last_status: i64,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Participant {
            name: row.name,
            last_status: row.last_status,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    sender: String,
    recipient: String,
    text: String,
    kind: String,
    time: String,
}

impl TryFrom<MessageRow> for Message {
    type Error = StoreError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let kind = MessageKind::from_str(&row.kind)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Message {
            from: row.sender,
            to: row.recipient,
            text: row.text,
            kind,
            time: row.time,
        })
    }
}

/// Store backed by a sqlx SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database at `database_url` and apply migrations
    ///
    /// In-memory URLs (`sqlite::memory:`) get a single long-lived
    /// connection, since every new connection would see an empty database.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect_with(options)
                .await?
        };

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Apply the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

async fn insert_message<'e, E>(executor: E, message: &Message) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO messages (sender, recipient, text, kind, time)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&message.from)
    .bind(&message.to)
    .bind(&message.text)
    .bind(message.kind.as_str())
    .bind(&message.time)
    .execute(executor)
    .await?;

    Ok(())
}

#[async_trait]
impl ChatStore for SqliteStore {
    async fn register(&self, participant: &Participant, notice: &Message) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO participants (name, last_status)
            VALUES (?1, ?2)
            "#,
        )
        .bind(&participant.name)
        .bind(participant.last_status)
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(StoreError::Duplicate(participant.name.clone()));
            }
            Err(e) => return Err(e.into()),
        }

        insert_message(&mut *tx, notice).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn find_participant(&self, name: &str) -> Result<Option<Participant>, StoreError> {
        let row = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT name, last_status
            FROM participants
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Participant::from))
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, StoreError> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT name, last_status
            FROM participants
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn append_message(&self, message: &Message) -> Result<(), StoreError> {
        insert_message(&self.pool, message).await?;
        Ok(())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT sender, recipient, text, kind, time
            FROM messages
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Message::try_from).collect()
    }

    async fn touch_participant(&self, name: &str, now: i64) -> Result<Option<i64>, StoreError> {
        let last_status = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE participants
            SET last_status = MAX(?1, last_status + 1)
            WHERE name = ?2
            RETURNING last_status
            "#,
        )
        .bind(now)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(last_status)
    }
}
