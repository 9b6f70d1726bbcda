// src/export/csv.rs

use super::columns::{ColumnSet, Quoting};
use super::record::{Cell, ExportRecord};
use crate::errors::{AppError, AppResult};
use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn csv_error(e: impl std::fmt::Display) -> AppError {
    AppError::Render(format!("CSV write error: {e}"))
}

fn quote_style(q: Quoting) -> QuoteStyle {
    match q {
        Quoting::Necessary => QuoteStyle::Necessary,
        // fields arrive already quoted, see `field`
        Quoting::NonNumeric => QuoteStyle::Never,
    }
}

/// Field text for one cell. Under `NonNumeric` the decision follows the
/// cell type, not the content: text that looks like a number is still quoted.
fn field(cell: &Cell, quoting: Quoting) -> String {
    match (cell, quoting) {
        (Cell::Text(s), Quoting::NonNumeric) => format!("\"{}\"", s.replace('"', "\"\"")),
        _ => cell.to_string(),
    }
}

/// Writes the header line and one line per record, `\n`-terminated.
///
/// The header is never quoted; numeric cells never are either. Text cells
/// follow the column set's policy, with embedded quotes doubled.
pub fn write_csv<W: Write>(
    mut out: W,
    columns: &ColumnSet,
    records: &[ExportRecord],
) -> AppResult<W> {
    {
        let mut header = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut out);
        header.write_record(columns.titles).map_err(csv_error)?;
        header.flush()?;
    }

    {
        let mut wtr = WriterBuilder::new()
            .quote_style(quote_style(columns.quoting))
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut out);

        for rec in records {
            let mut fields = Vec::with_capacity(columns.titles.len());
            for title in columns.titles {
                fields.push(field(rec.require(title)?, columns.quoting));
            }
            wtr.write_record(&fields).map_err(csv_error)?;
        }

        wtr.flush()?;
    }

    Ok(out)
}

/// In-memory encoding; identical bytes to what `write_csv` puts in a file.
pub fn encode_csv(columns: &ColumnSet, records: &[ExportRecord]) -> AppResult<Vec<u8>> {
    write_csv(Vec::new(), columns, records)
}

/// Writes the CSV to `path` and only returns once every byte reached the file.
pub fn write_csv_file(path: &Path, columns: &ColumnSet, records: &[ExportRecord]) -> AppResult<()> {
    let buffered = write_csv(BufWriter::new(File::create(path)?), columns, records)?;
    let file = buffered
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::columns::titles::*;
    use crate::export::columns::{EVENT_COLUMNS, HISTORY_COLUMNS, REPORT_COLUMNS};
    use crate::export::project::{project_events, project_history, project_report};
    use crate::report::aggregate;
    use crate::report::aggregate::tests::{event, participation, two_volunteers, volunteer};

    /// Parses `bytes` back and checks every field against its source record.
    fn assert_round_trip(columns: &ColumnSet, records: &[ExportRecord], bytes: &[u8]) {
        let mut rdr = ::csv::ReaderBuilder::new().from_reader(bytes);
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), columns.titles);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());
        for (row, rec) in rows.iter().zip(records) {
            for (i, title) in columns.titles.iter().enumerate() {
                assert_eq!(&row[i], rec.get(title).unwrap().to_string(), "{title}");
            }
        }
    }

    fn report_csv() -> String {
        let records = project_report(&aggregate(&two_volunteers()));
        String::from_utf8(encode_csv(&REPORT_COLUMNS, &records).unwrap()).unwrap()
    }

    #[test]
    fn report_example_two_volunteers() {
        let csv = report_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Volunteer Name,Volunteer Email,Skills,Total Events,Total Hours,\
             Event Name,Event Date,Role,Hours,Status,Participation Date"
        );
        assert_eq!(
            lines[1],
            r#""Ann","ann@example.org","Cooking, First Aid",1,4,"Food Drive","2024-05-02","Server",4,"completed","2024-05-02""#
        );
        assert_eq!(
            lines[2],
            r#""Bob","bob@example.org","N/A",0,0,"N/A","N/A","N/A",0,"N/A","N/A""#
        );
        assert!(csv.ends_with("\"N/A\"\n"));
        assert!(!csv.ends_with("\n\n"));
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(report_csv(), report_csv());
    }

    #[test]
    fn round_trip_recovers_quotes_and_commas() {
        let mut e = event("e1", r#"Bake "Sale", North"#, 3);
        e.details = "Line one\nline \"two\"".into();
        e.location = "Austin, TX".into();
        let records = project_events(&[e]);

        let bytes = encode_csv(&EVENT_COLUMNS, &records).unwrap();
        let mut rdr = ::csv::ReaderBuilder::new().from_reader(bytes.as_slice());

        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), EVENT_COLUMNS.titles);

        let row = rdr.records().next().unwrap().unwrap();
        for (i, title) in EVENT_COLUMNS.titles.iter().enumerate() {
            assert_eq!(row.get(i).unwrap(), records[0].get(title).unwrap().to_string());
        }
        assert_eq!(&row[EVENT_COLUMNS.titles.iter().position(|t| *t == EVENT_NAME).unwrap()],
            r#"Bake "Sale", North"#);
    }

    #[test]
    fn necessary_quoting_leaves_plain_fields_bare() {
        let records = project_events(&[event("e1", "Food Drive", 2)]);
        let csv = String::from_utf8(encode_csv(&EVENT_COLUMNS, &records).unwrap()).unwrap();
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "Food Drive,2024-05-02,Houston,,Cooking,medium,2024-04-01"
        );
    }

    #[test]
    fn missing_column_is_render_failure() {
        let bad = vec![ExportRecord::new().with(EVENT_NAME, Cell::text("x"))];
        let err = encode_csv(&EVENT_COLUMNS, &bad).unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }

    #[test]
    fn no_records_gives_header_only() {
        let csv = encode_csv(&EVENT_COLUMNS, &[]).unwrap();
        assert_eq!(
            String::from_utf8(csv).unwrap(),
            "Event Name,Date,Location,Description,Skills Required,Urgency,Created At\n"
        );
    }

    #[test]
    fn numeric_looking_text_is_still_quoted() {
        let mut h = participation("42", "ann@example.org", "7", Some(4.0));
        h.role = Some("1".into());
        let history = encode_csv(&HISTORY_COLUMNS, &project_history(&[h])).unwrap();
        assert_eq!(
            String::from_utf8(history).unwrap().lines().nth(1).unwrap(),
            r#""42","ann@example.org","7","1",4,"completed","2024-05-02","2024-05-02","2024-05-02""#
        );

        let mut snap = two_volunteers();
        snap.accounts = vec![
            volunteer("a@example.org", "2024"),
            volunteer("b@example.org", "NaN"),
            volunteer("c@example.org", "inf"),
        ];
        let report = encode_csv(&REPORT_COLUMNS, &project_report(&aggregate(&snap))).unwrap();
        let report = String::from_utf8(report).unwrap();
        let names: Vec<&str> = report
            .lines()
            .skip(1)
            .filter_map(|l| l.split(',').next())
            .collect();
        assert_eq!(names, [r#""2024""#, r#""NaN""#, r#""inf""#]);
        assert!(report.contains(r#""c@example.org","N/A",0,0,"N/A""#));
    }

    #[test]
    fn quoted_kinds_round_trip() {
        let mut snap = two_volunteers();
        snap.accounts[0].display_name = r#"Ann "Annie" Lee, Jr."#.into();
        snap.accounts[1].display_name = "1e3".into();
        snap.events[0].name = r#"Drive, "North""#.into();
        snap.history[0].id = "007".into();
        snap.history[0].role = Some(r#"Server, "lead""#.into());
        snap.history[0].hours = Some(2.25);

        let report = project_report(&aggregate(&snap));
        let bytes = encode_csv(&REPORT_COLUMNS, &report).unwrap();
        assert_round_trip(&REPORT_COLUMNS, &report, &bytes);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains(r#""Ann ""Annie"" Lee, Jr.""#));
        assert!(text.contains(r#""1e3""#));

        let history = project_history(&snap.history);
        let bytes = encode_csv(&HISTORY_COLUMNS, &history).unwrap();
        assert_round_trip(&HISTORY_COLUMNS, &history, &bytes);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains(r#""007","ann@example.org","e1","Server, ""lead""",2.25,"#));
    }

    #[test]
    fn file_output_is_complete() {
        let mut snap = two_volunteers();
        for i in 0..500 {
            snap.history
                .push(participation(&format!("h{i}"), "ann@example.org", "e1", Some(1.5)));
        }
        let records = project_history(&snap.history);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("volunteer-history.csv");
        write_csv_file(&path, &HISTORY_COLUMNS, &records).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.len() > 8 * 1024);
        assert_eq!(written, encode_csv(&HISTORY_COLUMNS, &records).unwrap());
    }
}
