//! ScoreBehaviorEventHandler - Validates and scores one behavior event.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::domain::foundation::Timestamp;
use crate::domain::scoring::{BehaviorEventRecord, BehaviorScore, BehaviorScorer};

/// Command carrying a raw behavior record.
#[derive(Debug, Clone)]
pub struct ScoreBehaviorEventCommand {
    pub record: BehaviorEventRecord,
    /// Stamped on records that arrive without a timestamp.
    pub received_at: Timestamp,
}

impl ScoreBehaviorEventCommand {
    pub fn new(record: BehaviorEventRecord) -> Self {
        Self {
            record,
            received_at: Timestamp::now(),
        }
    }
}

/// Handler for behavior event scoring.
pub struct ScoreBehaviorEventHandler {
    scorer: Arc<BehaviorScorer>,
}

impl ScoreBehaviorEventHandler {
    pub fn new(scorer: Arc<BehaviorScorer>) -> Self {
        Self { scorer }
    }

    pub fn handle(&self, cmd: ScoreBehaviorEventCommand) -> Result<BehaviorScore, ApplicationError> {
        let event = cmd.record.validate(cmd.received_at).map_err(|e| {
            warn!(field = e.field(), error = %e, "Behavior event rejected");
            e
        })?;

        let score = self.scorer.score(&event);
        debug!(
            event_type = %event.event_type,
            category = %event.category,
            user_id = %event.user_id,
            score_impact = score.score_impact,
            "Behavior event scored"
        );
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> ScoreBehaviorEventHandler {
        ScoreBehaviorEventHandler::new(Arc::new(BehaviorScorer::default()))
    }

    fn record(event_type: &str, category: &str, value: Option<f64>) -> BehaviorEventRecord {
        BehaviorEventRecord {
            event_type: Some(event_type.to_string()),
            category: Some(category.to_string()),
            action: Some("click".to_string()),
            user_id: Some("user-1".to_string()),
            session_id: Some("sess-1".to_string()),
            timestamp: None,
            value,
        }
    }

    #[test]
    fn engagement_ai_query_scores_8() {
        let score = handler()
            .handle(ScoreBehaviorEventCommand::new(record("ai_query", "engagement", Some(0.0))))
            .unwrap();
        assert_eq!(score.score_impact, 8);
    }

    #[test]
    fn unknown_type_scores_0() {
        let score = handler()
            .handle(ScoreBehaviorEventCommand::new(record("unknown_type", "other", Some(0.0))))
            .unwrap();
        assert_eq!(score.score_impact, 0);
    }

    #[test]
    fn missing_user_id_is_rejected() {
        let mut raw = record("page_view", "navigation", None);
        raw.user_id = None;

        let err = handler()
            .handle(ScoreBehaviorEventCommand::new(raw))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingField);
    }
}
