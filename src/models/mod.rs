pub mod log_row;
pub mod raw_table;
pub mod report;
pub mod task_event;

pub use log_row::LogRow;
pub use raw_table::RawTable;
pub use report::Report;
pub use task_event::TaskEventRow;
