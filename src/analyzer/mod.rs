pub mod chains;
pub mod report;
pub mod scanner;

pub use report::format_history;
pub use scanner::{scan_node, ChainScanner};
