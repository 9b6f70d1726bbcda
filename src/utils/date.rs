use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// `YYYY-MM-DD`, the only date shape used in exports.
pub fn iso_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Timestamp line printed under document titles.
pub fn generated_stamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d %H:%M").to_string()
}

pub fn now() -> DateTime<Local> {
    Local::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(iso_date(&d), "2024-01-05");

        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 7, 3, 0).unwrap();
        assert_eq!(generated_stamp(&ts), "2024-01-05 07:03");
    }
}
