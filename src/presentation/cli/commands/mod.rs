pub mod check;
pub mod down;
pub mod scan;

pub use check::*;
pub use down::*;
pub use scan::*;
