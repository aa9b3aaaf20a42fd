pub mod display;

pub use display::{style, Level, Reporter};
