//! ScoreQueryEventHandler - Validates and scores one query event.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::domain::foundation::Timestamp;
use crate::domain::scoring::{QueryEventRecord, QueryScore, QueryScorer};

/// Command carrying a raw query record.
#[derive(Debug, Clone)]
pub struct ScoreQueryEventCommand {
    pub record: QueryEventRecord,
    /// Stamped on records that arrive without a timestamp.
    pub received_at: Timestamp,
}

impl ScoreQueryEventCommand {
    pub fn new(record: QueryEventRecord) -> Self {
        Self {
            record,
            received_at: Timestamp::now(),
        }
    }
}

/// Handler for query event scoring.
pub struct ScoreQueryEventHandler {
    scorer: Arc<QueryScorer>,
}

impl ScoreQueryEventHandler {
    pub fn new(scorer: Arc<QueryScorer>) -> Self {
        Self { scorer }
    }

    pub fn handle(&self, cmd: ScoreQueryEventCommand) -> Result<QueryScore, ApplicationError> {
        let event = cmd.record.validate(cmd.received_at).map_err(|e| {
            warn!(field = e.field(), error = %e, "Query event rejected");
            e
        })?;

        let score = self.scorer.score(&event);
        // Prompt text stays out of logs; only its length is recorded.
        debug!(
            query_type = event.query_type.as_deref().unwrap_or("-"),
            prompt_len = event.prompt_len(),
            success = event.success,
            complexity = score.complexity,
            quality = score.quality,
            score_impact = score.score_impact,
            "Query event scored"
        );
        Ok(score)
    }
}
