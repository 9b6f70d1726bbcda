//! HTTP-shaped boundary over the export pipeline.
//!
//! Targets look like request lines without the method, e.g.
//! `/reports/volunteer-history?format=csv` or `/events/preview/csv`.

use super::dispatch::{ExportContext, ExportRequest, render_export};
use super::{ExportFormat, ExportKind};
use crate::db::pool::DbPool;
use crate::db::queries::HistoryOrder;
use crate::errors::{AppError, AppResult};
use serde_json::json;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportResponse {
    pub status: u16,
    pub content_type: String,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl ExportResponse {
    fn json_error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            content_disposition: None,
            body: json!({ "message": message }).to_string().into_bytes(),
        }
    }

    pub fn headers(&self) -> Vec<(&str, &str)> {
        let mut out = vec![("Content-Type", self.content_type.as_str())];
        if let Some(d) = &self.content_disposition {
            out.push(("Content-Disposition", d.as_str()));
        }
        out
    }
}

fn parse_query(query: &str) -> HashMap<&str, &str> {
    query
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| p.split_once('=').unwrap_or((p, "")))
        .collect()
}

fn history_order(query: &HashMap<&str, &str>) -> AppResult<HistoryOrder> {
    let raw = query.get("sort").copied().unwrap_or("");
    HistoryOrder::parse(raw)
        .ok_or_else(|| AppError::Validation(format!("Unsupported sort key: {raw}")))
}

/// Maps a target onto an export request.
pub fn parse_target(target: &str) -> AppResult<ExportRequest> {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let query = parse_query(query);
    let path = path.strip_prefix("/api").unwrap_or(path).trim_end_matches('/');
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["reports", "volunteer-history"] => {
            let format = ExportFormat::parse(query.get("format").copied())?;
            Ok(ExportRequest::download(ExportKind::Report, format))
        }
        ["events", "export", fmt] => Ok(ExportRequest::download(
            ExportKind::Events,
            ExportFormat::parse(Some(*fmt))?,
        )),
        ["events", "preview", "csv"] => Ok(ExportRequest::preview(ExportKind::Events)),
        ["volunteer-history", "export", fmt] => {
            let req = ExportRequest::download(ExportKind::History, ExportFormat::parse(Some(*fmt))?);
            Ok(req.with_history_order(history_order(&query)?))
        }
        ["volunteer-history", "preview", "csv"] => Ok(ExportRequest::preview(ExportKind::History)
            .with_history_order(history_order(&query)?)),
        _ => Err(AppError::NotFound(path.to_string())),
    }
}

/// Generic message for server-side failures; details only go to the log.
fn failure_message(req: &ExportRequest) -> &'static str {
    match (req.kind, req.format, req.delivery) {
        (ExportKind::Report, _, _) => "Error generating report",
        (_, _, super::Delivery::Inline) => "Failed to preview CSV",
        (_, ExportFormat::Csv, _) => "Failed to export CSV",
        (_, ExportFormat::Pdf, _) => "Failed to export PDF",
    }
}

/// Runs one target end to end. Never fails: errors become status codes.
pub fn handle(pool: &mut DbPool, target: &str, ctx: &ExportContext) -> ExportResponse {
    let req = match parse_target(target) {
        Ok(req) => req,
        Err(e) => {
            log::warn!("rejected {target}: {e}");
            return match e {
                AppError::NotFound(_) => ExportResponse::json_error(404, "Not found"),
                other => ExportResponse::json_error(other.status_code(), &other.to_string()),
            };
        }
    };

    match render_export(pool, &req, ctx) {
        Ok(out) => ExportResponse {
            status: 200,
            content_type: out.media_type.to_string(),
            content_disposition: out.content_disposition(),
            body: out.body,
        },
        Err(e) if e.is_client_error() => ExportResponse::json_error(e.status_code(), &e.to_string()),
        Err(e) => {
            log::error!("{target} failed: {e}");
            ExportResponse::json_error(e.status_code(), failure_message(&req))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Delivery;

    #[test]
    fn report_target_requires_valid_format() {
        let req = parse_target("/reports/volunteer-history?format=pdf").unwrap();
        assert_eq!(req.kind, ExportKind::Report);
        assert_eq!(req.format, ExportFormat::Pdf);

        for bad in [
            "/reports/volunteer-history",
            "/reports/volunteer-history?format=xml",
            "/reports/volunteer-history?format=",
        ] {
            let err = parse_target(bad).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.to_string(), "Format must be 'pdf' or 'csv'");
        }
    }

    #[test]
    fn entity_targets() {
        let req = parse_target("/api/events/export/csv").unwrap();
        assert_eq!((req.kind, req.format), (ExportKind::Events, ExportFormat::Csv));

        let req = parse_target("/volunteer-history/preview/csv").unwrap();
        assert_eq!(req.delivery, Delivery::Inline);
        assert_eq!(req.kind, ExportKind::History);

        let req = parse_target("/volunteer-history/export/pdf?sort=participationDate").unwrap();
        assert_eq!(req.history_order, HistoryOrder::ParticipationDateDesc);

        assert_eq!(parse_target("/events/export/xlsx").unwrap_err().status_code(), 400);
        assert_eq!(parse_target("/events/preview/pdf").unwrap_err().status_code(), 404);
        assert_eq!(
            parse_target("/volunteer-history/export/csv?sort=name").unwrap_err().status_code(),
            400
        );
    }

    #[test]
    fn handle_maps_errors_to_json_bodies() {
        let mut pool = DbPool::in_memory().unwrap();
        let ctx = ExportContext {
            generated_on: "2024-06-01 10:00".into(),
            report_title: None,
        };

        let bad = handle(&mut pool, "/reports/volunteer-history?format=doc", &ctx);
        assert_eq!(bad.status, 400);
        assert_eq!(bad.body, br#"{"message":"Format must be 'pdf' or 'csv'"}"#.to_vec());

        // no schema: the read fails
        let broken = handle(&mut pool, "/reports/volunteer-history?format=csv", &ctx);
        assert_eq!(broken.status, 500);
        assert_eq!(broken.body, br#"{"message":"Error generating report"}"#.to_vec());
        assert_eq!(broken.content_disposition, None);

        let missing = handle(&mut pool, "/nowhere", &ctx);
        assert_eq!(missing.status, 404);
    }
}
