pub mod choices;
pub mod questions;
