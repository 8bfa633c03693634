pub mod counts;
pub mod groups;
pub mod histogram;

/// The dashboard's director ranking and director grouping both cut off here.
pub const TOP_DIRECTORS: usize = 10;
