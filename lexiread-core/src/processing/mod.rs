//! Pipeline orchestration: the stages of the domain layer chained into a
//! single pass, plus order-preserving batch execution.

pub mod parallel;
pub mod pipeline;

pub use parallel::{map_ordered, ProcessingError};
pub use pipeline::{annotate_text, segment_text, AnnotatedSentence, Segmentation};
