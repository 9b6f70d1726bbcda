//! Joins the snapshot collections into per-volunteer report rows.

use super::fetch::ReportSnapshot;
use super::model::{ParticipationDetail, ReportRow};
use super::{NOT_AVAILABLE, UNKNOWN_EVENT};
use crate::models::{Event, ParticipationRecord, Profile};
use crate::utils::date::iso_date;
use std::collections::HashMap;

/// One row per volunteer account, in snapshot order.
///
/// Participation by emails outside the volunteer snapshot (administrators,
/// unknown accounts) is dropped from the report.
pub fn aggregate(snapshot: &ReportSnapshot) -> Vec<ReportRow> {
    let events: HashMap<&str, &Event> = snapshot
        .events
        .iter()
        .map(|e| (e.id.as_str(), e))
        .collect();

    let profiles: HashMap<&str, &Profile> = snapshot
        .profiles
        .iter()
        .map(|p| (p.email.as_str(), p))
        .collect();

    let mut groups: HashMap<&str, Vec<&ParticipationRecord>> = HashMap::new();
    for h in &snapshot.history {
        groups.entry(h.volunteer_email.as_str()).or_default().push(h);
    }

    snapshot
        .accounts
        .iter()
        .map(|acc| {
            let group = groups
                .get(acc.email.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();

            let participations: Vec<ParticipationDetail> = group
                .iter()
                .map(|h| detail(h, events.get(h.event_id.as_str()).copied()))
                .collect();

            ReportRow {
                volunteer_name: acc.report_name().to_string(),
                volunteer_email: acc.email.clone(),
                skills_summary: skills_summary(profiles.get(acc.email.as_str()).copied()),
                total_events: participations.len(),
                total_hours: group.iter().map(|h| h.hours_or_zero()).sum(),
                participations,
            }
        })
        .collect()
}

fn detail(h: &ParticipationRecord, event: Option<&Event>) -> ParticipationDetail {
    let (event_name, event_date) = match event {
        Some(e) => (e.name.clone(), iso_date(&e.date)),
        None => (UNKNOWN_EVENT.to_string(), NOT_AVAILABLE.to_string()),
    };

    ParticipationDetail {
        event_name,
        event_date,
        role: h.assigned_role().unwrap_or(NOT_AVAILABLE).to_string(),
        hours: h.hours_or_zero(),
        status: h.status_or_default().to_string(),
        participation_date: iso_date(&h.participation_date.date_naive()),
    }
}

fn skills_summary(profile: Option<&Profile>) -> String {
    match profile {
        Some(p) if !p.skills.is_empty() => p.skills.join(", "),
        _ => NOT_AVAILABLE.to_string(),
    }
}
