// Resume critique: uploaded PDF text is scored against a fixed keyword rubric
// keyed by the stated purpose, and rendered as a markdown feedback block.
// The rubric is immutable configuration, built once at startup.

pub mod feedback;
pub mod handlers;
pub mod rubric;
pub mod scorer;
