mod change_detector;
mod graph_filter;

pub use change_detector::{ChangeDetector, Correlation, CorrelationDetector};
pub use graph_filter::GraphFilter;
