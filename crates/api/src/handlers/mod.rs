pub mod categories;
pub mod drinks;
pub mod questions;
pub mod quizzes;
