mod chart;
mod tables;

pub use self::chart::curve as print_curve;
pub use self::tables::{batch as print_batch, options as print_options, result as print_result};
