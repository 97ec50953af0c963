pub mod date;
pub mod formatting;
pub mod table;

pub use formatting::fmt_number;
