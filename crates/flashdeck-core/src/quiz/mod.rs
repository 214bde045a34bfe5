//! Quiz mechanics: choosing questions and grading answers.

mod grader;
mod selector;

pub use grader::grade;
pub use selector::{select_sequence, Draws};
