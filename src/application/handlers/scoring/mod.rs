//! Scoring handlers.
//!
//! ## Commands
//! - Score a behavior event
//! - Score a query event

mod score_behavior_event;
mod score_query_event;

pub use score_behavior_event::{ScoreBehaviorEventCommand, ScoreBehaviorEventHandler};
pub use score_query_event::{ScoreQueryEventCommand, ScoreQueryEventHandler};
