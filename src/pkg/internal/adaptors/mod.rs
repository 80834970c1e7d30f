pub mod questions;
pub mod results;
