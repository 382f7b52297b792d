/*
[INPUT]:  Raw form fields and pasted bulk JSON text
[OUTPUT]: Validated NewTask values and checked bulk records
[POS]:    Validation layer - admission rules for the task store
[UPDATE]: When field rules or validation messages change
*/

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

pub const MIN_ESTIMATED_HOURS: f64 = 0.1;
pub const MIN_IMPORTANCE: i64 = 1;
pub const MAX_IMPORTANCE: i64 = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MSG_MISSING_FIELDS: &str = "Please fill in all required fields";
pub const MSG_HOURS_TOO_LOW: &str = "Estimated hours must be at least 0.1";
pub const MSG_IMPORTANCE_RANGE: &str = "Importance must be between 1 and 10";
pub const MSG_INVALID_DATE: &str = "Due date must be a valid date (YYYY-MM-DD)";
pub const MSG_EMPTY_JSON: &str = "Please enter JSON data";
pub const MSG_NOT_AN_ARRAY: &str = "JSON must be an array of tasks";

/// Raw single-task form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub due_date: String,
    pub estimated_hours: String,
    pub importance: String,
}

/// A validated task awaiting an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: i64,
}

/// Validate the single-task form.
///
/// Presence is checked first (a zero or unparseable number counts as
/// missing), then hours, then importance, then the date format.
pub fn validate_form(form: &TaskForm) -> Result<NewTask, ClientError> {
    let title = form.title.trim();
    let due_date = form.due_date.trim();
    let hours = parse_number(form.estimated_hours.trim());
    let importance = parse_number(form.importance.trim());

    let hours_present = matches!(hours, Some(value) if value != 0.0);
    let importance_present = matches!(importance, Some(value) if value != 0.0);
    if title.is_empty() || due_date.is_empty() || !hours_present || !importance_present {
        return Err(ClientError::validation(MSG_MISSING_FIELDS));
    }

    let estimated_hours = hours.unwrap_or_default();
    if estimated_hours < MIN_ESTIMATED_HOURS {
        return Err(ClientError::validation(MSG_HOURS_TOO_LOW));
    }

    let importance = form
        .importance
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|value| (MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(value))
        .ok_or_else(|| ClientError::validation(MSG_IMPORTANCE_RANGE))?;

    let due_date = NaiveDate::parse_from_str(due_date, DATE_FORMAT)
        .map_err(|_| ClientError::validation(MSG_INVALID_DATE))?;

    Ok(NewTask {
        title: title.to_string(),
        due_date,
        estimated_hours,
        importance,
    })
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// A bulk record as pasted: every field optional and loosely typed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTaskRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub due_date: Option<Value>,
    #[serde(default)]
    pub estimated_hours: Option<Value>,
    #[serde(default)]
    pub importance: Option<Value>,
    #[serde(default)]
    pub dependencies: Option<Value>,
}

/// A bulk record whose fields passed validation. `id` is `None` when the
/// store must generate one.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedRecord {
    pub id: Option<i64>,
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: i64,
    pub dependencies: Vec<i64>,
}

impl RawTaskRecord {
    /// Convert into the strict shape, citing `index` on failure.
    pub fn check(self, index: usize) -> Result<CheckedRecord, ClientError> {
        let required = [
            self.title.as_ref(),
            self.due_date.as_ref(),
            self.estimated_hours.as_ref(),
            self.importance.as_ref(),
        ];
        if required.into_iter().any(|field| !is_truthy(field)) {
            return Err(ClientError::validation(format!(
                "Task at index {index} is missing required fields"
            )));
        }

        let invalid =
            |field: &str| ClientError::validation(format!("Task at index {index} has an invalid {field}"));

        let title = match self.title {
            Some(Value::String(title)) if !title.trim().is_empty() => title,
            _ => return Err(invalid("title")),
        };

        let due_date = self
            .due_date
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|text| NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok())
            .ok_or_else(|| invalid("due_date"))?;

        let estimated_hours = self
            .estimated_hours
            .as_ref()
            .and_then(value_as_f64)
            .ok_or_else(|| invalid("estimated_hours"))?;
        if estimated_hours < MIN_ESTIMATED_HOURS {
            return Err(ClientError::validation(format!(
                "Task at index {index} has estimated_hours below {MIN_ESTIMATED_HOURS}"
            )));
        }

        let importance = self
            .importance
            .as_ref()
            .and_then(value_as_integer)
            .ok_or_else(|| invalid("importance"))?;
        if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&importance) {
            return Err(ClientError::validation(format!(
                "Task at index {index} has importance outside {MIN_IMPORTANCE}-{MAX_IMPORTANCE}"
            )));
        }

        let id = match self.id.as_ref() {
            value if !is_truthy(value) => None,
            Some(value) => Some(value_as_integer(value).ok_or_else(|| invalid("id"))?),
            None => None,
        };

        let dependencies = match self.dependencies {
            value if !is_truthy(value.as_ref()) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(value_as_integer)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| invalid("dependencies"))?,
            Some(_) => return Err(invalid("dependencies")),
            None => Vec::new(),
        };

        Ok(CheckedRecord {
            id,
            title,
            due_date,
            estimated_hours,
            importance,
            dependencies,
        })
    }
}

/// Parse pasted text into bulk records. Element checks happen at load time.
pub fn parse_bulk(text: &str) -> Result<Vec<RawTaskRecord>, ClientError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ClientError::validation(MSG_EMPTY_JSON));
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|err| ClientError::Parse(err.to_string()))?;
    let Value::Array(items) = value else {
        return Err(ClientError::validation(MSG_NOT_AN_ARRAY));
    };

    // Non-object elements become an empty record and fail the presence check.
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
            _ => RawTaskRecord::default(),
        })
        .collect())
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text.trim()),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

fn value_as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|n| n.fract() == 0.0).map(|n| n as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(title: &str, due: &str, hours: &str, importance: &str) -> TaskForm {
        TaskForm {
            title: title.to_string(),
            due_date: due.to_string(),
            estimated_hours: hours.to_string(),
            importance: importance.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let task = validate_form(&form("  Write docs ", "2024-06-15", "2.5", "7")).unwrap();
        assert_eq!(task.title, "Write docs");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(task.estimated_hours, 2.5);
        assert_eq!(task.importance, 7);
    }

    #[rstest]
    #[case("0.1", "1")]
    #[case("0.1", "10")]
    #[case("40", "5")]
    fn test_form_boundaries_accepted(#[case] hours: &str, #[case] importance: &str) {
        assert!(validate_form(&form("T", "2024-06-15", hours, importance)).is_ok());
    }

    #[rstest]
    #[case("0.09", "5", MSG_HOURS_TOO_LOW)]
    #[case("-2", "5", MSG_HOURS_TOO_LOW)]
    #[case("1", "11", MSG_IMPORTANCE_RANGE)]
    #[case("1", "-1", MSG_IMPORTANCE_RANGE)]
    #[case("1", "5.5", MSG_IMPORTANCE_RANGE)]
    #[case("0", "5", MSG_MISSING_FIELDS)]
    #[case("1", "0", MSG_MISSING_FIELDS)]
    #[case("abc", "5", MSG_MISSING_FIELDS)]
    #[case("1", "abc", MSG_MISSING_FIELDS)]
    #[case("1", "", MSG_MISSING_FIELDS)]
    #[case("", "5", MSG_MISSING_FIELDS)]
    fn test_form_rejections(#[case] hours: &str, #[case] importance: &str, #[case] expected: &str) {
        let err = validate_form(&form("T", "2024-06-15", hours, importance)).unwrap_err();
        assert_eq!(err, ClientError::validation(expected));
    }

    #[test]
    fn test_form_missing_title_and_bad_date() {
        let err = validate_form(&form("   ", "2024-06-15", "1", "5")).unwrap_err();
        assert_eq!(err.to_string(), MSG_MISSING_FIELDS);

        let err = validate_form(&form("T", "15/06/2024", "1", "5")).unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_DATE);
    }

    #[test]
    fn test_parse_bulk_errors() {
        assert_eq!(parse_bulk("   ").unwrap_err().to_string(), MSG_EMPTY_JSON);
        assert_eq!(
            parse_bulk(r#"{"title": "x"}"#).unwrap_err().to_string(),
            MSG_NOT_AN_ARRAY
        );
        let err = parse_bulk("[{").unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_check_full_record() {
        let records = parse_bulk(
            r#"[{"id": 9, "title": "Ship", "due_date": "2024-07-01",
                 "estimated_hours": "3", "importance": 8.0, "dependencies": [1, 2]}]"#,
        )
        .unwrap();
        let checked = records.into_iter().next().unwrap().check(0).unwrap();
        assert_eq!(checked.id, Some(9));
        assert_eq!(checked.estimated_hours, 3.0);
        assert_eq!(checked.importance, 8);
        assert_eq!(checked.dependencies, vec![1, 2]);
    }

    #[test]
    fn test_check_defaults_id_and_dependencies() {
        let records = parse_bulk(
            r#"[{"id": 0, "title": "Ship", "due_date": "2024-07-01",
                 "estimated_hours": 1, "importance": 3}]"#,
        )
        .unwrap();
        let checked = records.into_iter().next().unwrap().check(0).unwrap();
        assert_eq!(checked.id, None);
        assert!(checked.dependencies.is_empty());
    }

    #[rstest]
    #[case(r#"{"title": "A", "due_date": "2024-07-01", "estimated_hours": 1}"#, "Task at index 2 is missing required fields")]
    #[case(r#"{"title": "", "due_date": "2024-07-01", "estimated_hours": 1, "importance": 2}"#, "Task at index 2 is missing required fields")]
    #[case(r#"{"title": "A", "due_date": "tomorrow", "estimated_hours": 1, "importance": 2}"#, "Task at index 2 has an invalid due_date")]
    #[case(r#"{"title": "A", "due_date": "2024-07-01", "estimated_hours": 0.05, "importance": 2}"#, "Task at index 2 has estimated_hours below 0.1")]
    #[case(r#"{"title": "A", "due_date": "2024-07-01", "estimated_hours": 1, "importance": 12}"#, "Task at index 2 has importance outside 1-10")]
    #[case(r#"{"title": "A", "due_date": "2024-07-01", "estimated_hours": 1, "importance": 2, "dependencies": "1,2"}"#, "Task at index 2 has an invalid dependencies")]
    #[case(r#""just text""#, "Task at index 2 is missing required fields")]
    fn test_check_rejections(#[case] element: &str, #[case] expected: &str) {
        let records = parse_bulk(&format!("[{element}]")).unwrap();
        let err = records.into_iter().next().unwrap().check(2).unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
}
