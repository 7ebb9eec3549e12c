//! Domain models
//!
//! Models carry the same scalars as their entities but hold relations
//! instead of raw foreign keys. A to-one relation is a [`Ref`], a reverse
//! relation is a [`Lazy`]; both stay unresolved until an options strategy
//! loads them.

pub mod answer;
pub mod issue;
pub mod issue_standard;
pub mod issue_standard_question_type_option;
pub mod issue_standard_topic_priority;
pub mod point;
pub mod question;
pub mod question_type;
pub mod quiz;
pub mod relation;
pub mod solution;
pub mod subject;
pub mod topic;
pub mod user;

pub use answer::*;
pub use issue::*;
pub use issue_standard::*;
pub use issue_standard_question_type_option::*;
pub use issue_standard_topic_priority::*;
pub use point::*;
pub use question::*;
pub use question_type::*;
pub use quiz::*;
pub use relation::{Identified, Lazy, Ref};
pub use solution::*;
pub use subject::*;
pub use topic::*;
pub use user::*;
