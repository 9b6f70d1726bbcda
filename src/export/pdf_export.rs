// src/export/pdf_export.rs

use super::ExportKind;
use super::columns::titles::*;
use super::pdf::{Face, PdfDocument, TextStyle};
use super::record::ExportRecord;
use crate::errors::AppResult;
use crate::report::ReportRow;
use std::collections::BTreeMap;

const TITLE: TextStyle = TextStyle::new(Face::Bold, 20.0).centered();
const SUBTITLE: TextStyle = TextStyle::new(Face::Regular, 10.0).centered();
const VOLUNTEER_HEADING: TextStyle = TextStyle::new(Face::Bold, 14.0);
const ENTITY_HEADING: TextStyle = TextStyle::new(Face::Bold, 16.0).color(0.31, 0.275, 0.898);
const SECTION: TextStyle = TextStyle::new(Face::Bold, 11.0);
const BODY: TextStyle = TextStyle::new(Face::Regular, 10.0);
const DETAIL: TextStyle = TextStyle::new(Face::Regular, 9.0).indent(12.0);
const DETAIL_SUB: TextStyle = TextStyle::new(Face::Regular, 9.0).indent(30.0);
const NOTE: TextStyle = TextStyle::new(Face::Oblique, 10.0).indent(20.0);
const SMALL: TextStyle = TextStyle::new(Face::Regular, 9.0).color(0.2, 0.2, 0.2);

fn header(doc: &mut PdfDocument, title: &str, generated_on: &str) {
    doc.text(title, &TITLE);
    doc.move_down(1.0);
    doc.text(&format!("Generated on: {generated_on}"), &SUBTITLE);
}

/// Starts a block: page-break check, then a rule between consecutive blocks.
fn begin_block(doc: &mut PdfDocument, index: usize) {
    doc.ensure_block_room();
    if index > 0 {
        doc.move_down(1.0);
        doc.rule();
        doc.move_down(1.0);
    }
}

/// Nested layout: one block per volunteer with its participations listed inside.
pub fn render_report_pdf(rows: &[ReportRow], title: &str, generated_on: &str) -> Vec<u8> {
    let mut doc = PdfDocument::new();
    header(&mut doc, title, generated_on);
    doc.move_down(2.0);

    for (index, row) in rows.iter().enumerate() {
        begin_block(&mut doc, index);

        doc.text(&format!("{}. {}", index + 1, row.volunteer_name), &VOLUNTEER_HEADING);
        doc.text(&format!("Email: {}", row.volunteer_email), &BODY);
        doc.text(&format!("Skills: {}", row.skills_summary), &BODY);
        doc.text(&format!("Total Events: {}", row.total_events), &BODY);
        doc.text(&format!("Total Hours: {}", row.total_hours), &BODY);
        doc.move_down(0.5);

        if row.has_participations() {
            doc.text("Event Participation:", &SECTION);
            for (i, p) in row.participations.iter().enumerate() {
                doc.text(
                    &format!("{}. {} ({})", i + 1, p.event_name, p.event_date),
                    &DETAIL,
                );
                doc.text(
                    &format!("Role: {} | Hours: {} | Status: {}", p.role, p.hours, p.status),
                    &DETAIL_SUB,
                );
            }
        } else {
            doc.text("No participation history", &NOTE);
        }
    }

    doc.finalize()
}

/// Status → count over the whole record set, sorted by status.
pub fn status_histogram(records: &[ExportRecord]) -> AppResult<BTreeMap<String, usize>> {
    let mut hist = BTreeMap::new();
    for r in records {
        *hist.entry(r.require(STATUS)?.to_string()).or_insert(0) += 1;
    }
    Ok(hist)
}

fn event_block(doc: &mut PdfDocument, r: &ExportRecord) -> AppResult<()> {
    doc.text(&r.require(EVENT_NAME)?.to_string(), &ENTITY_HEADING);
    doc.move_down(0.5);
    doc.text(
        &format!(
            "Date: {}    Urgency: {}",
            r.require(DATE)?,
            r.require(URGENCY)?.to_string().to_uppercase()
        ),
        &BODY,
    );
    doc.text(&format!("Location: {}", r.require(LOCATION)?), &BODY);

    let skills = r.require(SKILLS_REQUIRED)?.to_string();
    if !skills.is_empty() {
        doc.text(&format!("Skills Required: {skills}"), &BODY);
    }

    let details = r.require(DESCRIPTION)?.to_string();
    if !details.is_empty() {
        doc.text(&format!("Description: {details}"), &SMALL);
    }
    Ok(())
}

fn history_block(doc: &mut PdfDocument, r: &ExportRecord) -> AppResult<()> {
    doc.text(&format!("Record {}", r.require(ID)?), &ENTITY_HEADING);
    doc.move_down(0.5);
    doc.text(&format!("Volunteer: {}", r.require(USER_ID)?), &BODY);
    doc.text(&format!("Event: {}", r.require(EVENT_ID)?), &BODY);
    doc.text(
        &format!(
            "Role: {} | Hours: {} | Status: {}",
            r.require(ROLE)?,
            r.require(HOURS)?,
            r.require(STATUS)?
        ),
        &BODY,
    );
    doc.text(
        &format!("Participation Date: {}", r.require(PARTICIPATION_DATE)?),
        &BODY,
    );
    doc.text(
        &format!(
            "Created: {}    Updated: {}",
            r.require(CREATED_AT)?,
            r.require(UPDATED_AT)?
        ),
        &SMALL,
    );
    Ok(())
}

/// Flat layout: one block per record, with a count line (and, for history,
/// a status summary) under the title.
pub fn render_entity_pdf(
    kind: ExportKind,
    records: &[ExportRecord],
    title: &str,
    generated_on: &str,
) -> AppResult<Vec<u8>> {
    let mut doc = PdfDocument::new();
    header(&mut doc, title, generated_on);
    doc.text(&format!("Total records: {}", records.len()), &SUBTITLE);

    if kind == ExportKind::History {
        let hist = status_histogram(records)?;
        if !hist.is_empty() {
            doc.move_down(1.0);
            doc.text("Status summary", &SECTION.centered());
            for (status, n) in &hist {
                doc.text(&format!("{status}: {n}"), &SUBTITLE);
            }
        }
    }
    doc.move_down(2.0);

    for (index, r) in records.iter().enumerate() {
        begin_block(&mut doc, index);
        match kind {
            ExportKind::History => history_block(&mut doc, r)?,
            _ => event_block(&mut doc, r)?,
        }
    }

    Ok(doc.finalize())
}
