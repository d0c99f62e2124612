// Overlap primitives.

/// The bounding rectangle of a chain in `(query, target)` coordinate space.
/// Both intervals are half-open with `end > start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlap {
    pub query_id: u32,
    pub query_start: u32,
    pub query_end: u32,
    pub target_id: u32,
    pub target_start: u32,
    pub target_end: u32,
}

#[path = "overlap_test.rs"]
mod overlap_test;

/// The longer of the two spans.
pub fn overlap_length(ovlp: &Overlap) -> u32 {
    (ovlp.query_end - ovlp.query_start).max(ovlp.target_end - ovlp.target_start)
}

/// One minus the ratio of the shorter span over the longer.
pub fn overlap_error(ovlp: &Overlap) -> f64 {
    let query_span = ovlp.query_end - ovlp.query_start;
    let target_span = ovlp.target_end - ovlp.target_start;
    1.0 - query_span.min(target_span) as f64 / query_span.max(target_span) as f64
}

/// The same overlap seen from the target's side.
pub fn reverse_overlap(ovlp: &Overlap) -> Overlap {
    Overlap {
        query_id: ovlp.target_id,
        query_start: ovlp.target_start,
        query_end: ovlp.target_end,
        target_id: ovlp.query_id,
        target_start: ovlp.query_start,
        target_end: ovlp.query_end,
    }
}
