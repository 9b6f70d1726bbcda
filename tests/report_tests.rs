mod common;
use common::{init_db_with_data, setup_test_db, temp_out, vr};
use predicates::str::contains;
use std::fs;

#[test]
fn test_report_csv_rows_and_totals() {
    let db_path = setup_test_db("report_csv_rows");
    init_db_with_data(&db_path, "report_csv_rows");
    let out = temp_out("report_csv_rows", "csv");

    vr().args(["--db", &db_path, "report", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read report csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "Volunteer Name,Volunteer Email,Skills,Total Events,Total Hours,Event Name,Event Date,Role,Hours,Status,Participation Date"
    );
    // Ann: 2 participations, Bob: 1 placeholder
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        r#""Ann Lee","ann@example.org","Cooking, First Aid",2,6.5,"Food Drive","2024-05-02","Server",4,"completed","2024-05-02""#
    );
    assert_eq!(
        lines[2],
        r#""Ann Lee","ann@example.org","Cooking, First Aid",2,6.5,"Unknown Event","N/A","N/A",2.5,"pending","2024-06-20""#
    );
    assert_eq!(
        lines[3],
        r#""bob@example.org","bob@example.org","N/A",0,0,"N/A","N/A","N/A",0,"N/A","N/A""#
    );
    assert!(!content.contains("root@example.org"));
}

#[test]
fn test_report_pdf_written() {
    let db_path = setup_test_db("report_pdf");
    init_db_with_data(&db_path, "report_pdf");
    let out = temp_out("report_pdf", "pdf");

    vr().args(["--db", &db_path, "report", "--format", "pdf", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read report pdf");
    assert!(bytes.starts_with(b"%PDF-"));
    let has = |s: &str| bytes.windows(s.len()).any(|w| w == s.as_bytes());
    assert!(has("Volunteer Participation History Report"));
    assert!(has("(Page 1 of 1)"));
    assert!(!has("root@example.org"));
}

#[test]
fn test_report_invalid_format_fails() {
    let db_path = setup_test_db("report_invalid_format");
    init_db_with_data(&db_path, "report_invalid_format");
    let out = temp_out("report_invalid_format", "xml");

    vr().args(["--db", &db_path, "report", "--format", "xml", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Format must be 'pdf' or 'csv'"));
}

#[test]
fn test_report_non_absolute_path_fails() {
    let db_path = setup_test_db("report_non_abs");
    init_db_with_data(&db_path, "report_non_abs");

    vr().args(["--db", &db_path, "report", "--format", "csv", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("Output file path must be absolute"));
}

#[test]
fn test_report_force_overwrite() {
    let db_path = setup_test_db("report_force");
    init_db_with_data(&db_path, "report_force");
    let out = temp_out("report_force", "csv");
    fs::write(&out, "OLD_CONTENT").expect("create file");

    vr().args(["--db", &db_path, "report", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read report csv");
    assert!(content.starts_with("Volunteer Name,"));
}

#[test]
fn test_report_without_schema_fails() {
    let db_path = setup_test_db("report_no_schema");
    let out = temp_out("report_no_schema", "csv");

    vr().args(["--db", &db_path, "report", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Failed to read accounts"));
}
