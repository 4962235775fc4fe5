//! Behavior and query events, and their validation from raw records.
//!
//! Raw records arrive from client instrumentation with every field optional.
//! Validation happens once, up front: an event missing an identifying field is
//! rejected whole, never partially scored.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp, UserId, ValidationError};

/// One user action captured by client instrumentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub category: String,
    pub action: String,
    pub user_id: UserId,
    pub session_id: SessionId,
    pub timestamp: Timestamp,
    pub value: Option<f64>,
}

/// One AI-query interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEvent {
    /// Query channel (`ai_chat`, `search`, `voice`, `help`, ...).
    #[serde(rename = "type")]
    pub query_type: Option<String>,
    pub prompt: String,
    pub user_id: UserId,
    pub session_id: SessionId,
    /// Response time in milliseconds; may be fractional.
    pub duration_ms: Option<f64>,
    pub success: bool,
    pub model: Option<String>,
    pub timestamp: Timestamp,
}

impl QueryEvent {
    /// Prompt length in characters.
    pub fn prompt_len(&self) -> usize {
        self.prompt.chars().count()
    }
}

/// Unvalidated behavior event as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorEventRecord {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub category: Option<String>,
    pub action: Option<String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub value: Option<f64>,
}

impl BehaviorEventRecord {
    /// Validates the record. A missing timestamp is stamped with `received_at`.
    pub fn validate(self, received_at: Timestamp) -> Result<BehaviorEvent, ValidationError> {
        let user_id = UserId::new(required("userId", self.user_id)?)?;
        let session_id = SessionId::new(required("sessionId", self.session_id)?)?;
        let event_type = required("type", self.event_type)?;
        let value = self.value.map(|v| finite("value", v)).transpose()?;

        Ok(BehaviorEvent {
            event_type,
            category: self.category.unwrap_or_default(),
            action: self.action.unwrap_or_default(),
            user_id,
            session_id,
            timestamp: self.timestamp.unwrap_or(received_at),
            value,
        })
    }
}

/// Unvalidated query event as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEventRecord {
    #[serde(rename = "type")]
    pub query_type: Option<String>,
    pub prompt: Option<String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    #[serde(rename = "duration")]
    pub duration_ms: Option<f64>,
    pub success: Option<bool>,
    pub model: Option<String>,
    pub timestamp: Option<Timestamp>,
}

impl QueryEventRecord {
    /// Validates the record. A missing timestamp is stamped with `received_at`.
    pub fn validate(self, received_at: Timestamp) -> Result<QueryEvent, ValidationError> {
        let user_id = UserId::new(required("userId", self.user_id)?)?;
        let session_id = SessionId::new(required("sessionId", self.session_id)?)?;
        let prompt = required("prompt", self.prompt)?;
        let duration_ms = self
            .duration_ms
            .map(|ms| non_negative("duration", ms))
            .transpose()?;

        Ok(QueryEvent {
            query_type: self.query_type,
            prompt,
            user_id,
            session_id,
            duration_ms,
            success: self.success.unwrap_or(false),
            model: self.model,
            timestamp: self.timestamp.unwrap_or(received_at),
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::missing_field(field)),
        Some(v) if v.trim().is_empty() => Err(ValidationError::empty_field(field)),
        Some(v) => Ok(v),
    }
}

fn finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::invalid_format(field, "must be a finite number"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn behavior_record() -> BehaviorEventRecord {
        BehaviorEventRecord {
            event_type: Some("click".to_string()),
            category: Some("engagement".to_string()),
            action: Some("cta".to_string()),
            user_id: Some("user-1".to_string()),
            session_id: Some("sess-1".to_string()),
            timestamp: None,
            value: Some(250.0),
        }
    }

    fn query_record() -> QueryEventRecord {
        QueryEventRecord {
            query_type: Some("ai_chat".to_string()),
            prompt: Some("What is an API?".to_string()),
            user_id: Some("user-1".to_string()),
            session_id: Some("sess-1".to_string()),
            duration_ms: Some(1200.0),
            success: Some(true),
            model: Some("gpt-4".to_string()),
            timestamp: None,
        }
    }

    #[test]
    fn valid_behavior_record_converts() {
        let received = Timestamp::now();
        let event = behavior_record().validate(received).unwrap();
        assert_eq!(event.event_type, "click");
        assert_eq!(event.user_id.as_str(), "user-1");
        assert_eq!(event.timestamp, received);
        assert_eq!(event.value, Some(250.0));
    }

    #[test]
    fn behavior_record_requires_user_id() {
        let record = BehaviorEventRecord {
            user_id: None,
            ..behavior_record()
        };
        let err = record.validate(Timestamp::now()).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("userId"));
    }

    #[test]
    fn behavior_record_requires_session_id() {
        let record = BehaviorEventRecord {
            session_id: Some("  ".to_string()),
            ..behavior_record()
        };
        let err = record.validate(Timestamp::now()).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("sessionId"));
    }

    #[test]
    fn behavior_record_requires_type() {
        let record = BehaviorEventRecord {
            event_type: None,
            ..behavior_record()
        };
        let err = record.validate(Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), "type");
    }

    #[test]
    fn behavior_category_and_action_default_to_empty() {
        let record = BehaviorEventRecord {
            category: None,
            action: None,
            ..behavior_record()
        };
        let event = record.validate(Timestamp::now()).unwrap();
        assert_eq!(event.category, "");
        assert_eq!(event.action, "");
    }

    #[test]
    fn query_record_requires_prompt() {
        let record = QueryEventRecord {
            prompt: None,
            ..query_record()
        };
        let err = record.validate(Timestamp::now()).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("prompt"));
    }

    #[test]
    fn query_record_rejects_blank_prompt() {
        let record = QueryEventRecord {
            prompt: Some("   ".to_string()),
            ..query_record()
        };
        assert!(record.validate(Timestamp::now()).is_err());
    }

    #[test]
    fn query_success_defaults_to_false() {
        let record = QueryEventRecord {
            success: None,
            ..query_record()
        };
        let event = record.validate(Timestamp::now()).unwrap();
        assert!(!event.success);
    }

    #[test]
    fn query_record_deserializes_wire_names() {
        let record: QueryEventRecord = serde_json::from_str(
            r#"{"type":"voice","prompt":"hi","userId":"u","sessionId":"s","duration":4000,"success":true,"model":"claude-3-haiku","timestamp":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.query_type.as_deref(), Some("voice"));
        assert_eq!(record.duration_ms, Some(4000.0));
        assert!(record.timestamp.is_some());
    }

    #[test]
    fn fractional_duration_is_accepted() {
        let record: QueryEventRecord = serde_json::from_str(
            r#"{"prompt":"hello there","userId":"u","sessionId":"s","duration":2500.5,"success":true}"#,
        )
        .unwrap();
        let event = record.validate(Timestamp::now()).unwrap();
        assert_eq!(event.duration_ms, Some(2500.5));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let record = QueryEventRecord {
            duration_ms: Some(-1.0),
            ..query_record()
        };
        let err = record.validate(Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), "duration");
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn non_finite_duration_is_rejected() {
        let record = QueryEventRecord {
            duration_ms: Some(f64::INFINITY),
            ..query_record()
        };
        let err = record.validate(Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), "duration");
    }

    #[test]
    fn prompt_len_counts_characters() {
        let event = QueryEventRecord {
            prompt: Some("héllo".to_string()),
            ..query_record()
        }
        .validate(Timestamp::now())
        .unwrap();
        assert_eq!(event.prompt_len(), 5);
    }
}
