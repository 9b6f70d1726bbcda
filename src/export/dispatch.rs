// src/export/dispatch.rs

use super::columns::ExportKind;
use super::csv::{encode_csv, write_csv_file};
use super::fs_utils::stage_in_scratch;
use super::pdf_export::{render_entity_pdf, render_report_pdf};
use super::project::{project_events, project_history, project_report};
use super::record::ExportRecord;
use super::ExportFormat;
use crate::db::pool::DbPool;
use crate::db::queries::HistoryOrder;
use crate::errors::{AppError, AppResult};
use crate::report::{ReportRow, aggregate, fetch_events, fetch_history, fetch_report_snapshot};
use crate::utils::date::{generated_stamp, now};
use std::fs;

/// How the caller receives the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Download with a suggested file name.
    Attachment,
    /// Plain-text preview shown in place.
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest {
    pub kind: ExportKind,
    pub format: ExportFormat,
    pub delivery: Delivery,
    pub history_order: HistoryOrder,
}

impl ExportRequest {
    pub fn download(kind: ExportKind, format: ExportFormat) -> Self {
        Self {
            kind,
            format,
            delivery: Delivery::Attachment,
            history_order: HistoryOrder::default(),
        }
    }

    pub fn preview(kind: ExportKind) -> Self {
        Self {
            kind,
            format: ExportFormat::Csv,
            delivery: Delivery::Inline,
            history_order: HistoryOrder::default(),
        }
    }

    pub fn with_history_order(mut self, order: HistoryOrder) -> Self {
        self.history_order = order;
        self
    }
}

/// Inputs to rendering that do not come from the store.
#[derive(Debug, Clone)]
pub struct ExportContext {
    pub generated_on: String,
    pub report_title: Option<String>,
}

impl ExportContext {
    pub fn now(report_title: Option<String>) -> Self {
        Self {
            generated_on: generated_stamp(&now()),
            report_title,
        }
    }

    fn title_for(&self, kind: ExportKind) -> &str {
        match (kind, &self.report_title) {
            (ExportKind::Report, Some(t)) => t.as_str(),
            _ => kind.default_title(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedExport {
    pub media_type: &'static str,
    pub file_name: String,
    pub delivery: Delivery,
    pub body: Vec<u8>,
}

impl RenderedExport {
    pub fn content_disposition(&self) -> Option<String> {
        match self.delivery {
            Delivery::Attachment => Some(format!("attachment; filename={}", self.file_name)),
            Delivery::Inline => None,
        }
    }
}

/// What a dataset looks like before encoding.
enum Payload {
    Nested(Vec<ReportRow>),
    Flat(Vec<ExportRecord>),
}

impl Payload {
    fn records(&self) -> Vec<ExportRecord> {
        match self {
            Payload::Nested(rows) => project_report(rows),
            Payload::Flat(records) => records.clone(),
        }
    }
}

fn load(pool: &mut DbPool, req: &ExportRequest) -> AppResult<Payload> {
    Ok(match req.kind {
        ExportKind::Report => {
            let snapshot = fetch_report_snapshot(pool)?;
            Payload::Nested(aggregate(&snapshot))
        }
        ExportKind::Events => Payload::Flat(project_events(&fetch_events(pool)?)),
        ExportKind::History => {
            Payload::Flat(project_history(&fetch_history(pool, req.history_order)?))
        }
    })
}

fn encode(
    req: &ExportRequest,
    payload: &Payload,
    ctx: &ExportContext,
    file_name: &str,
) -> AppResult<Vec<u8>> {
    let columns = req.kind.columns();
    let title = ctx.title_for(req.kind);

    match (req.format, req.delivery) {
        (ExportFormat::Csv, Delivery::Inline) => encode_csv(columns, &payload.records()),
        (ExportFormat::Csv, Delivery::Attachment) => {
            let records = payload.records();
            stage_in_scratch(file_name, |path| write_csv_file(path, columns, &records))
        }
        (ExportFormat::Pdf, Delivery::Attachment) => {
            let bytes = match payload {
                Payload::Nested(rows) => render_report_pdf(rows, title, &ctx.generated_on),
                Payload::Flat(records) => {
                    render_entity_pdf(req.kind, records, title, &ctx.generated_on)?
                }
            };
            stage_in_scratch(file_name, |path| Ok(fs::write(path, &bytes)?))
        }
        (ExportFormat::Pdf, Delivery::Inline) => Err(AppError::Validation(
            "Preview is only available as CSV".to_string(),
        )),
    }
}

/// Fetch → aggregate/project → encode, for one request.
/// The body is complete before it is returned; nothing is streamed partially.
pub fn render_export(
    pool: &mut DbPool,
    req: &ExportRequest,
    ctx: &ExportContext,
) -> AppResult<RenderedExport> {
    log::debug!(
        "export {:?} as {} ({:?})",
        req.kind,
        req.format.as_str(),
        req.delivery
    );

    let payload = load(pool, req)?;
    let file_name = req.kind.file_name(req.format);
    let body = encode(req, &payload, ctx, &file_name)?;

    let media_type = match req.delivery {
        Delivery::Inline => "text/plain",
        Delivery::Attachment => req.format.media_type(),
    };

    log::debug!("export {file_name} ready: {} bytes", body.len());

    Ok(RenderedExport {
        media_type,
        file_name,
        delivery: req.delivery,
        body,
    })
}
