pub mod bounds_reader;
pub mod feed_reader;
pub mod search_reader;

pub use bounds_reader::BoundsReader;
pub use feed_reader::FeedReader;
pub use search_reader::SearchReader;

use serde_json::Value;

use crate::error::{MonitorError, Result};

/// Checks the upstream envelope and returns its `data` element.
///
/// Any status other than "ok" surfaces the whole payload as an API error so
/// the caller can log what the upstream actually said.
pub(crate) fn require_ok_data(payload: &Value) -> Result<&Value> {
    let status = payload.get("status").and_then(Value::as_str);
    if status != Some("ok") {
        return Err(MonitorError::Api {
            payload: payload.clone(),
        });
    }

    Ok(payload.get("data").unwrap_or(&Value::Null))
}

/// Reads an integer that the upstream may report as a JSON number or as a
/// numeric string ("45"). Placeholders like "-" come back as `None`.
pub(crate) fn lenient_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_ok_data_rejects_error_status() {
        let payload = json!({"status": "error", "data": "Invalid key"});
        let err = require_ok_data(&payload).unwrap_err();
        match err {
            MonitorError::Api { payload } => {
                assert_eq!(payload["data"], "Invalid key");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_require_ok_data_missing_status_is_api_error() {
        let payload = json!({"data": []});
        assert!(require_ok_data(&payload).is_err());
    }

    #[test]
    fn test_lenient_i64_accepts_numbers_and_strings() {
        assert_eq!(lenient_i64(&json!(45)), Some(45));
        assert_eq!(lenient_i64(&json!("45")), Some(45));
        assert_eq!(lenient_i64(&json!(45.7)), Some(45));
        assert_eq!(lenient_i64(&json!("-")), None);
        assert_eq!(lenient_i64(&json!(null)), None);
    }
}
