//! Read-only snapshots of the source collections for one export.

use crate::db::pool::DbPool;
use crate::db::queries::{
    HistoryOrder, load_accounts_by_role, load_events, load_history, load_profiles,
};
use crate::errors::{AppError, AppResult};
use crate::models::{Account, Event, ParticipationRecord, Profile, Role};
use rusqlite::TransactionBehavior;

/// Everything the aggregator needs, captured at one point in time.
#[derive(Debug, Clone, Default)]
pub struct ReportSnapshot {
    /// Volunteer accounts only, in fetch order.
    pub accounts: Vec<Account>,
    pub profiles: Vec<Profile>,
    pub events: Vec<Event>,
    pub history: Vec<ParticipationRecord>,
}

fn logged(collection: &'static str, e: rusqlite::Error) -> AppError {
    log::error!("fetch of {collection} failed: {e}");
    AppError::fetch(collection, e)
}

/// Reads the four collections inside a single read transaction; the report
/// is only built once all of them are in memory.
pub fn fetch_report_snapshot(pool: &mut DbPool) -> AppResult<ReportSnapshot> {
    let tx = pool
        .conn
        .transaction_with_behavior(TransactionBehavior::Deferred)
        .map_err(|e| logged("store", e))?;

    let accounts =
        load_accounts_by_role(&tx, Role::Volunteer).map_err(|e| logged("accounts", e))?;
    let history =
        load_history(&tx, HistoryOrder::Insertion).map_err(|e| logged("volunteer_history", e))?;
    let events = load_events(&tx).map_err(|e| logged("events", e))?;
    let profiles = load_profiles(&tx).map_err(|e| logged("profiles", e))?;

    tx.finish().map_err(|e| logged("store", e))?;

    log::debug!(
        "report snapshot: {} volunteers, {} history rows, {} events, {} profiles",
        accounts.len(),
        history.len(),
        events.len(),
        profiles.len()
    );

    Ok(ReportSnapshot {
        accounts,
        profiles,
        events,
        history,
    })
}

pub fn fetch_events(pool: &DbPool) -> AppResult<Vec<Event>> {
    load_events(&pool.conn).map_err(|e| logged("events", e))
}

pub fn fetch_history(pool: &DbPool, order: HistoryOrder) -> AppResult<Vec<ParticipationRecord>> {
    load_history(&pool.conn, order).map_err(|e| logged("volunteer_history", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_schema_is_a_fetch_failure() {
        let mut pool = DbPool::in_memory().unwrap();
        let err = fetch_report_snapshot(&mut pool).unwrap_err();
        assert!(matches!(err, AppError::Fetch { collection: "accounts", .. }));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn empty_store_gives_empty_snapshot() {
        let mut pool = DbPool::in_memory().unwrap();
        crate::db::initialize::init_db(&pool.conn).unwrap();
        let snap = fetch_report_snapshot(&mut pool).unwrap();
        assert!(snap.accounts.is_empty());
        assert!(snap.history.is_empty());
    }
}
