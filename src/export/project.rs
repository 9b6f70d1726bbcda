//! Flattening into export records, shared by every output format.

use super::columns::titles::*;
use super::record::{Cell, ExportRecord};
use crate::models::{Event, ParticipationRecord};
use crate::report::{NOT_AVAILABLE, ReportRow};
use crate::utils::date::iso_date;

/// Separator for list fields in flat exports.
pub const LIST_SEPARATOR: &str = "; ";

/// One record per participation; a volunteer without any participation
/// still yields exactly one record with placeholder event columns.
pub fn project_report(rows: &[ReportRow]) -> Vec<ExportRecord> {
    let mut out = Vec::with_capacity(rows.iter().map(|r| r.total_events.max(1)).sum());

    for row in rows {
        let base = ExportRecord::new()
            .with(VOLUNTEER_NAME, Cell::text(&row.volunteer_name))
            .with(VOLUNTEER_EMAIL, Cell::text(&row.volunteer_email))
            .with(SKILLS, Cell::text(&row.skills_summary))
            .with(TOTAL_EVENTS, Cell::Count(row.total_events))
            .with(TOTAL_HOURS, Cell::Number(row.total_hours));

        if row.participations.is_empty() {
            out.push(
                base.with(EVENT_NAME, Cell::text(NOT_AVAILABLE))
                    .with(EVENT_DATE, Cell::text(NOT_AVAILABLE))
                    .with(ROLE, Cell::text(NOT_AVAILABLE))
                    .with(HOURS, Cell::Number(0.0))
                    .with(STATUS, Cell::text(NOT_AVAILABLE))
                    .with(PARTICIPATION_DATE, Cell::text(NOT_AVAILABLE)),
            );
            continue;
        }

        for p in &row.participations {
            out.push(
                base.clone()
                    .with(EVENT_NAME, Cell::text(&p.event_name))
                    .with(EVENT_DATE, Cell::text(&p.event_date))
                    .with(ROLE, Cell::text(&p.role))
                    .with(HOURS, Cell::Number(p.hours))
                    .with(STATUS, Cell::text(&p.status))
                    .with(PARTICIPATION_DATE, Cell::text(&p.participation_date)),
            );
        }
    }

    out
}

pub fn project_events(events: &[Event]) -> Vec<ExportRecord> {
    events
        .iter()
        .map(|e| {
            ExportRecord::new()
                .with(EVENT_NAME, Cell::text(&e.name))
                .with(DATE, Cell::text(iso_date(&e.date)))
                .with(LOCATION, Cell::text(&e.location))
                .with(DESCRIPTION, Cell::text(&e.details))
                .with(SKILLS_REQUIRED, Cell::text(e.skills_required.join(LIST_SEPARATOR)))
                .with(URGENCY, Cell::text(e.urgency.to_db_str()))
                .with(CREATED_AT, Cell::text(iso_date(&e.created_at.date_naive())))
        })
        .collect()
}

pub fn project_history(history: &[ParticipationRecord]) -> Vec<ExportRecord> {
    history
        .iter()
        .map(|h| {
            ExportRecord::new()
                .with(ID, Cell::text(&h.id))
                .with(USER_ID, Cell::text(&h.volunteer_email))
                .with(EVENT_ID, Cell::text(&h.event_id))
                .with(ROLE, Cell::text(h.assigned_role().unwrap_or(NOT_AVAILABLE)))
                .with(HOURS, Cell::Number(h.hours_or_zero()))
                .with(STATUS, Cell::text(&h.status))
                .with(
                    PARTICIPATION_DATE,
                    Cell::text(iso_date(&h.participation_date.date_naive())),
                )
                .with(CREATED_AT, Cell::text(iso_date(&h.created_at.date_naive())))
                .with(UPDATED_AT, Cell::text(iso_date(&h.updated_at.date_naive())))
        })
        .collect()
}
