//! Event scoring domain module.
//!
//! Converts one behavior or query event into an integer score impact for
//! partner ranking. Both scorers are deterministic linear models so that every
//! factor can be inspected and reproduced.
//!
//! # Module Structure
//!
//! - `events` - Event types and validation of raw records
//! - `behavior` - Behavior event scorer
//! - `complexity` - Lexical prompt complexity
//! - `quality` - Query interaction quality
//! - `query` - Query event scorer

mod behavior;
mod complexity;
mod events;
mod quality;
mod query;

pub use behavior::{BehaviorScore, BehaviorScorer, BehaviorScoringConfig};
pub use complexity::{ComplexityModel, LexicalPattern};
pub use events::{BehaviorEvent, BehaviorEventRecord, QueryEvent, QueryEventRecord};
pub use quality::QualityModel;
pub use query::{QueryScore, QueryScorer, QueryScoringConfig};
