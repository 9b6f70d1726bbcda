#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vr() -> Command {
    cargo_bin_cmd!("vreport")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_vreport.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Ann: two participations (one on a deleted event), Bob: none,
/// Root: administrator with history that must never show up.
pub const DATASET: &str = r#"{
  "accounts": [
    {"email": "ann@example.org", "displayName": "Ann Lee", "role": "volunteer"},
    {"email": "root@example.org", "displayName": "Root", "role": "administrator"},
    {"email": "bob@example.org", "displayName": "", "role": "volunteer"}
  ],
  "profiles": [
    {"email": "ann@example.org", "skills": ["Cooking", "First Aid"]},
    {"email": "root@example.org", "skills": ["Admin"]}
  ],
  "events": [
    {
      "id": "e2", "name": "Park \"Spring\" Cleanup", "date": "2024-06-10",
      "location": "Austin, TX", "skillsRequired": ["Lifting", "Gardening"],
      "urgency": "high", "details": "Bring gloves, water",
      "createdAt": "2024-05-01T08:00:00Z"
    },
    {
      "id": "e1", "name": "Food Drive", "date": "2024-05-02",
      "location": "Houston", "skillsRequired": ["Cooking"],
      "urgency": "low", "details": "",
      "createdAt": "2024-04-01T08:00:00Z"
    }
  ],
  "history": [
    {
      "id": "h1", "volunteerEmail": "ann@example.org", "eventId": "e1",
      "role": "Server", "hours": 4, "status": "completed",
      "participationDate": "2024-05-02T12:00:00Z",
      "createdAt": "2024-05-03T09:00:00Z", "updatedAt": "2024-05-03T09:00:00Z"
    },
    {
      "id": "h2", "volunteerEmail": "ann@example.org", "eventId": "deleted-event",
      "hours": 2.5, "status": "pending",
      "participationDate": "2024-06-20T12:00:00Z",
      "createdAt": "2024-06-21T09:00:00Z", "updatedAt": "2024-06-22T09:00:00Z"
    },
    {
      "id": "h3", "volunteerEmail": "root@example.org", "eventId": "e2",
      "role": "Lead", "hours": 10, "status": "completed",
      "participationDate": "2024-06-10T12:00:00Z",
      "createdAt": "2024-06-11T09:00:00Z", "updatedAt": "2024-06-11T09:00:00Z"
    }
  ]
}"#;

/// Initialize the DB schema and import the sample dataset
pub fn init_db_with_data(db_path: &str, name: &str) {
    vr().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let dataset = temp_out(&format!("{name}_dataset"), "json");
    fs::write(&dataset, DATASET).expect("write dataset");

    vr().args(["--db", db_path, "import", "--file", &dataset])
        .assert()
        .success();
}
