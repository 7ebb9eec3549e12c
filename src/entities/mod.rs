//! Persistence entities
//!
//! Entities mirror database rows one to one. Foreign keys are plain ids;
//! `id` stays `None` until the row has been inserted.

pub mod answer;
pub mod issue;
pub mod issue_standard;
pub mod issue_standard_question_type_option;
pub mod issue_standard_topic_priority;
pub mod point;
pub mod question;
pub mod question_type;
pub mod quiz;
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
pub use solution::*;
pub use subject::*;
pub use topic::*;
pub use user::*;
