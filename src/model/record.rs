/// Number of rating buckets in a well-formed histogram, one per rating 1..=10.
pub const HISTOGRAM_BUCKETS: usize = 10;

/// One movie, normalized from a raw CSV row.
///
/// `histogram[i]` is the number of user ratings at value `i + 1`. A record
/// whose source histogram cell was absent or malformed carries an empty
/// vector and counts as unrated.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: i32,
    pub decade: i32,
    pub director: String,
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    pub histogram: Vec<u32>,
}

impl Record {
    pub fn is_rated(&self) -> bool {
        self.histogram.iter().any(|&c| c > 0)
    }
}
