//! SQLite-backed character store.
//!
//! One row per character, one row per held quest. Quest row ids give the
//! acceptance order; `(character_id, name_key)` is unique so a character can
//! never hold two quests with the same case-folded name.

use std::collections::HashSet;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

use guildhall_domain::{
    Character, CharacterClass, CharacterId, CharacterName, Description, Quest, QuestName,
    QuestStatus,
};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        name_key TEXT NOT NULL,
        class TEXT NOT NULL,
        level INTEGER NOT NULL DEFAULT 1 CHECK (level >= 1),
        experience INTEGER NOT NULL DEFAULT 0 CHECK (experience >= 0),
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_characters_name_key ON characters (name_key, id)",
    r#"
    CREATE TABLE IF NOT EXISTS quests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        character_id INTEGER NOT NULL REFERENCES characters (id) ON DELETE CASCADE,
        name TEXT NOT NULL,
        name_key TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        experience_reward INTEGER NOT NULL DEFAULT 50 CHECK (experience_reward >= 0),
        status TEXT NOT NULL DEFAULT 'Pending',
        accepted_at TEXT NOT NULL,
        UNIQUE (character_id, name_key)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_quests_character ON quests (character_id, id)",
];

/// SQLite implementation of [`CharacterRepo`].
pub struct SqliteCharacterRepo {
    pool: SqlitePool,
}

impl SqliteCharacterRepo {
    /// Open (creating if needed) the database file and ensure the schema.
    pub async fn open(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("open", e))?;

        let repo = Self { pool };
        repo.ensure_schema().await?;
        Ok(repo)
    }

    async fn ensure_schema(&self) -> Result<(), RepoError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("ensure_schema", e))?;
        }
        Ok(())
    }

    /// Close the pool, waiting for in-flight operations.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Build a character from its row plus its quest rows. Callers run this
/// inside the transaction that read `row`, so both reads see one snapshot.
async fn load(conn: &mut SqliteConnection, row: SqliteRow) -> Result<Character, RepoError> {
    let id: i64 = row.get("id");
    let quest_rows = sqlx::query(
        r#"
        SELECT name, description, experience_reward, status, accepted_at
        FROM quests
        WHERE character_id = ?
        ORDER BY id
        "#,
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| RepoError::from_sqlx("load_quests", e))?;

    let quests = quest_rows
        .iter()
        .map(quest_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    character_from_row(&row, quests)
}

fn character_from_row(row: &SqliteRow, quests: Vec<Quest>) -> Result<Character, RepoError> {
    let id: i64 = row.get("id");
    let name: String = row.get("name");
    let class: String = row.get("class");
    let level: i64 = row.get("level");
    let experience: i64 = row.get("experience");
    let created_at: String = row.get("created_at");

    Ok(Character::from_parts(
        CharacterId::from_i64(id),
        CharacterName::new(name).map_err(RepoError::serialization)?,
        CharacterClass::from_str(&class).map_err(RepoError::serialization)?,
        u32::try_from(level).map_err(RepoError::serialization)?,
        u64::try_from(experience).map_err(RepoError::serialization)?,
        quests,
        parse_timestamp(&created_at)?,
    ))
}

fn quest_from_row(row: &SqliteRow) -> Result<Quest, RepoError> {
    let name: String = row.get("name");
    let description: String = row.get("description");
    let reward: i64 = row.get("experience_reward");
    let status: String = row.get("status");
    let accepted_at: String = row.get("accepted_at");

    Ok(Quest::from_parts(
        QuestName::new(name).map_err(RepoError::serialization)?,
        Description::new(description).map_err(RepoError::serialization)?,
        u64::try_from(reward).map_err(RepoError::serialization)?,
        QuestStatus::from_str(&status).map_err(RepoError::serialization)?,
        parse_timestamp(&accepted_at)?,
    ))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(RepoError::serialization)
}

fn to_sql_int(value: u64) -> Result<i64, RepoError> {
    i64::try_from(value).map_err(RepoError::serialization)
}

#[async_trait]
impl CharacterRepo for SqliteCharacterRepo {
    async fn create(
        &self,
        name: &CharacterName,
        class: CharacterClass,
        created_at: DateTime<Utc>,
    ) -> Result<Character, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO characters (name, name_key, class, level, experience, created_at)
            VALUES (?, ?, ?, 1, 0, ?)
            "#,
        )
        .bind(name.as_str())
        .bind(name.as_str().to_lowercase())
        .bind(class.as_str())
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::from_sqlx("create_character", e))?;

        Ok(Character::new(
            CharacterId::from_i64(result.last_insert_rowid()),
            name.clone(),
            class,
            created_at,
        ))
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("get_character", e))?;

        let row = sqlx::query("SELECT * FROM characters WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepoError::from_sqlx("get_character", e))?;

        let character = match row {
            Some(row) => Some(load(&mut tx, row).await?),
            None => None,
        };

        tx.commit()
            .await
            .map_err(|e| RepoError::database("get_character", e))?;
        Ok(character)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Character>, RepoError> {
        let name = name.trim();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("find_character_by_name", e))?;

        let row = sqlx::query(
            r#"
            SELECT * FROM characters
            WHERE name = ? OR name_key = ?
            ORDER BY (name = ?) DESC, id
            LIMIT 1
            "#,
        )
        .bind(name)
        .bind(name.to_lowercase())
        .bind(name)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| RepoError::from_sqlx("find_character_by_name", e))?;

        let character = match row {
            Some(row) => Some(load(&mut tx, row).await?),
            None => None,
        };

        tx.commit()
            .await
            .map_err(|e| RepoError::database("find_character_by_name", e))?;
        Ok(character)
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        let id = character.id().as_i64();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("save_character", e))?;

        let updated = sqlx::query("UPDATE characters SET level = ?, experience = ? WHERE id = ?")
            .bind(i64::from(character.level()))
            .bind(to_sql_int(character.experience())?)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::from_sqlx("save_character", e))?;

        if updated.rows_affected() == 0 {
            return Err(RepoError::not_found("Character", character.id()));
        }

        let stored: Vec<String> =
            sqlx::query_scalar("SELECT name_key FROM quests WHERE character_id = ?")
                .bind(id)
                .fetch_all(&mut *tx)
                .await
                .map_err(|e| RepoError::from_sqlx("save_quests", e))?;
        let stored: HashSet<String> = stored.into_iter().collect();
        let held: HashSet<String> = character.quests().iter().map(|q| q.name().key()).collect();

        for key in stored.difference(&held) {
            sqlx::query("DELETE FROM quests WHERE character_id = ? AND name_key = ?")
                .bind(id)
                .bind(key)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepoError::from_sqlx("save_quests", e))?;
        }

        // Held quests are oldest first, so inserting in order keeps row ids
        // in acceptance order.
        for quest in character.quests() {
            let key = quest.name().key();
            if stored.contains(&key) {
                continue;
            }
            sqlx::query(
                r#"
                INSERT INTO quests
                    (character_id, name, name_key, description, experience_reward, status, accepted_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(quest.name().as_str())
            .bind(key)
            .bind(quest.description().as_str())
            .bind(to_sql_int(quest.experience_reward())?)
            .bind(quest.status().as_str())
            .bind(quest.accepted_at().to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::from_sqlx("save_quests", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("save_character", e))?;
        Ok(())
    }
}
