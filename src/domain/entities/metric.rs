//! Visit count entity.

/// Number of successful resolutions recorded for one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMetric {
    pub link_id: i64,
    pub clicks: u64,
}

impl LinkMetric {
    pub fn new(link_id: i64, clicks: u64) -> Self {
        Self { link_id, clicks }
    }
}
