//! Loading debt records from a JSON file.
//!
//! The file is a JSON array whose elements carry `name`, `amount`, `rate` and
//! `payment`. Range checks happen later in [`Ledger::build`](crate::Ledger::build).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::debt::DebtRecord;
use crate::error::InputError;

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<DebtRecord>, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&content)?;
    debug!(path = %path.display(), records = records.len(), "Loaded debt file");
    Ok(records)
}

pub fn parse_records(json: &str) -> Result<Vec<DebtRecord>, InputError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_records() {
        let records = parse_records(
            r#"[{"name": "card", "amount": 1000.5, "rate": 0.18, "payment": 35}]"#,
        )
        .unwrap();
        assert_eq!(records, vec![DebtRecord::new("card", 1000.5, 0.18, 35.0)]);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_records(r#"{"name": "card"}"#).unwrap_err();
        assert!(matches!(err, InputError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err =
            parse_records(r#"[{"name": "x", "amount": "ten", "rate": 0.1, "payment": 1}]"#)
                .unwrap_err();
        assert!(matches!(err, InputError::Malformed(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_records("/nonexistent/debts.json").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert_eq!(err.to_string(), "Failed to read debt file /nonexistent/debts.json");
    }

    #[test]
    fn test_malformed_cause_reported_once() {
        use std::error::Error;

        let err = parse_records(r#"[{"name": "car", "amount": 5000, "rate": 0.05}]"#).unwrap_err();
        assert_eq!(err.to_string(), "Malformed debt input");
        let cause = err.source().expect("serde error is the source").to_string();
        assert!(cause.contains("missing field `payment`"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("payoff-input-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"[{{"name": "loan", "amount": 300, "rate": 0.07, "payment": 20}}]"#
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "loan");
    }
}
