use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters of a report run: which groups and which open-time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub group: String,
    /// Epoch seconds, inclusive.
    pub from: i64,
    /// Epoch seconds, inclusive. `0` leaves the window open-ended.
    pub to: i64,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            group: "*".to_string(),
            from: 0,
            to: 0,
        }
    }
}

impl ReportRequest {
    /// Reads a request object leniently: a missing or ill-typed field keeps its
    /// default instead of failing the whole report.
    pub fn from_json(request: &Value) -> Self {
        let mut out = Self::default();

        if let Some(group) = request.get("group").and_then(Value::as_str) {
            out.group = group.to_string();
        } else if request.get("group").is_some() {
            tracing::warn!("Request field 'group' is not a string; using '*'");
        }
        if let Some(from) = request.get("from").and_then(as_epoch) {
            out.from = from;
        }
        if let Some(to) = request.get("to").and_then(as_epoch) {
            out.to = to;
        }

        out
    }
}

fn as_epoch(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_request() {
        let request = ReportRequest::from_json(&json!({"group": "real*", "from": 100, "to": 200}));
        assert_eq!(
            request,
            ReportRequest {
                group: "real*".to_string(),
                from: 100,
                to: 200
            }
        );
    }

    #[test]
    fn test_ill_typed_fields_keep_defaults() {
        let request =
            ReportRequest::from_json(&json!({"group": 5, "from": "yesterday", "to": 1.5e9}));
        assert_eq!(request.group, "*");
        assert_eq!(request.from, 0);
        assert_eq!(request.to, 1_500_000_000);
    }

    #[test]
    fn test_non_object_request() {
        assert_eq!(ReportRequest::from_json(&json!(null)), ReportRequest::default());
    }
}
