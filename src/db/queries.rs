//! Row mappers and the handful of statements the engine needs.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Account, Dataset, Event, ParticipationRecord, Profile, Role, Urgency};
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, params};

/// Ordering applied to a direct history export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryOrder {
    /// Fetch (insertion) order.
    #[default]
    Insertion,
    ParticipationDateDesc,
    CreatedAtAsc,
}

impl HistoryOrder {
    /// Parses the `sort` query/CLI value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "none" => Some(Self::Insertion),
            "participationDate" => Some(Self::ParticipationDateDesc),
            "createdAt" => Some(Self::CreatedAtAsc),
            _ => None,
        }
    }

    fn order_by(&self) -> &'static str {
        match self {
            Self::Insertion => "rowid ASC",
            Self::ParticipationDateDesc => "participation_date DESC, rowid ASC",
            Self::CreatedAtAsc => "created_at ASC, rowid ASC",
        }
    }
}

fn conversion_error(idx: usize, msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(std::io::Error::other(msg)))
}

/// Reads a JSON string array column.
fn json_list(row: &Row, idx: usize) -> Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(idx, format!("bad list {raw:?}: {e}")))
}

fn map_account(row: &Row) -> Result<Account> {
    let role_str: String = row.get(2)?;
    let role = Role::from_db_str(&role_str)
        .ok_or_else(|| conversion_error(2, format!("invalid role: {role_str}")))?;
    Ok(Account {
        email: row.get(0)?,
        display_name: row.get(1)?,
        role,
    })
}

fn map_profile(row: &Row) -> Result<Profile> {
    Ok(Profile {
        email: row.get(0)?,
        skills: json_list(row, 1)?,
    })
}

fn map_event(row: &Row) -> Result<Event> {
    let urgency_str: String = row.get(5)?;
    let urgency = Urgency::from_db_str(&urgency_str)
        .ok_or_else(|| conversion_error(5, format!("invalid urgency: {urgency_str}")))?;
    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        location: row.get(3)?,
        skills_required: json_list(row, 4)?,
        urgency,
        details: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn map_history(row: &Row) -> Result<ParticipationRecord> {
    Ok(ParticipationRecord {
        id: row.get(0)?,
        volunteer_email: row.get(1)?,
        event_id: row.get(2)?,
        role: row.get(3)?,
        hours: row.get(4)?,
        status: row.get(5)?,
        participation_date: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

pub fn load_accounts_by_role(conn: &Connection, role: Role) -> Result<Vec<Account>> {
    let mut stmt = conn.prepare(
        "SELECT email, display_name, role FROM accounts
         WHERE role = ?1
         ORDER BY rowid ASC",
    )?;
    let rows = stmt.query_map([role.to_db_str()], map_account)?;
    rows.collect()
}

pub fn load_profiles(conn: &Connection) -> Result<Vec<Profile>> {
    let mut stmt = conn.prepare("SELECT email, skills FROM profiles ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_profile)?;
    rows.collect()
}

/// Events by ascending date; ties keep insertion order.
pub fn load_events(conn: &Connection) -> Result<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, date, location, skills_required, urgency, details, created_at
         FROM events
         ORDER BY date ASC, rowid ASC",
    )?;
    let rows = stmt.query_map([], map_event)?;
    rows.collect()
}

pub fn load_history(conn: &Connection, order: HistoryOrder) -> Result<Vec<ParticipationRecord>> {
    let sql = format!(
        "SELECT id, volunteer_email, event_id, role, hours, status,
                participation_date, created_at, updated_at
         FROM volunteer_history
         ORDER BY {}",
        order.order_by()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_history)?;
    rows.collect()
}

/// Upserts a whole dataset in one transaction. Returns the number of rows written.
pub fn import_dataset(pool: &mut DbPool, ds: &Dataset) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;
    let mut written = 0;

    for a in &ds.accounts {
        written += tx.execute(
            "INSERT OR REPLACE INTO accounts (email, display_name, role) VALUES (?1, ?2, ?3)",
            params![a.email, a.display_name, a.role.to_db_str()],
        )?;
    }

    for p in &ds.profiles {
        let skills = serde_json::to_string(&p.skills)
            .map_err(|e| AppError::Import(format!("profile {}: {e}", p.email)))?;
        written += tx.execute(
            "INSERT OR REPLACE INTO profiles (email, skills) VALUES (?1, ?2)",
            params![p.email, skills],
        )?;
    }

    for e in &ds.events {
        let skills = serde_json::to_string(&e.skills_required)
            .map_err(|err| AppError::Import(format!("event {}: {err}", e.id)))?;
        written += tx.execute(
            "INSERT OR REPLACE INTO events
                (id, name, date, location, skills_required, urgency, details, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                e.id,
                e.name,
                e.date,
                e.location,
                skills,
                e.urgency.to_db_str(),
                e.details,
                e.created_at
            ],
        )?;
    }

    for h in &ds.history {
        written += tx.execute(
            "INSERT OR REPLACE INTO volunteer_history
                (id, volunteer_email, event_id, role, hours, status,
                 participation_date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                h.id,
                h.volunteer_email,
                h.event_id,
                h.role,
                h.hours,
                h.status,
                h.participation_date,
                h.created_at,
                h.updated_at
            ],
        )?;
    }

    tx.commit()?;
    Ok(written)
}

