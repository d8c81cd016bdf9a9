use crate::constants::{metadata, STDIN_INDICATOR};
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::io::Read;

/// Parses `--answers`; `-` reads the JSON object from `stdin`.
pub fn read_answers(arg: Option<&str>, mut stdin: impl Read) -> Result<Map<String, Value>> {
    match arg {
        None => Ok(Map::new()),
        Some(STDIN_INDICATOR) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            parse_answers(&buf)
        }
        Some(raw) => parse_answers(raw),
    }
}

fn parse_answers(raw: &str) -> Result<Map<String, Value>> {
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Other(anyhow::anyhow!(
            "--answers must be a JSON object, got: {other}"
        ))),
    }
}

/// The Metadata Mapping as it stands before any prompt: fixed fields first,
/// then caller answers, which may replace them.
pub fn seed_metadata(
    project_name: &str,
    directory: &str,
    year: i32,
    answers: Map<String, Value>,
) -> Map<String, Value> {
    let mut seeded = Map::new();
    seeded.insert(metadata::PROJECT_NAME.to_string(), Value::from(project_name));
    seeded.insert(metadata::YEAR.to_string(), Value::from(year));
    seeded.insert(metadata::DIRECTORY.to_string(), Value::from(directory));
    seeded.extend(answers);
    seeded
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_inline_json() {
        let answers = read_answers(Some(r#"{"description": "demo"}"#), std::io::empty()).unwrap();
        assert_eq!(answers["description"], json!("demo"));
    }

    #[test]
    fn reads_stdin_on_dash() {
        let answers =
            read_answers(Some("-"), r#"{"typescript": true}"#.as_bytes()).unwrap();
        assert_eq!(answers["typescript"], json!(true));
    }

    #[test]
    fn no_answers_is_empty() {
        assert!(read_answers(None, std::io::empty()).unwrap().is_empty());
        assert!(read_answers(Some("-"), "".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_or_non_object_answers() {
        assert!(matches!(
            read_answers(Some("{oops"), std::io::empty()),
            Err(Error::JSONParseError(_))
        ));
        assert!(read_answers(Some("[1, 2]"), std::io::empty()).is_err());
    }

    #[test]
    fn seeds_fixed_fields_then_answers() {
        let seeded = seed_metadata(
            "demo",
            "demo",
            2024,
            json!({"description": "x", "year": 1999}).as_object().unwrap().clone(),
        );
        assert_eq!(seeded["name"], json!("demo"));
        assert_eq!(seeded["directory"], json!("demo"));
        assert_eq!(seeded["year"], json!(1999));
        assert_eq!(seeded["description"], json!("x"));
    }
}
