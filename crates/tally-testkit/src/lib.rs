#![deny(warnings)]
#![deny(clippy::all)]

/// Deterministic filler bytes for digest tests.
pub fn sample_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Split positions worth exercising for incremental updates: both ends,
/// the midpoint, and the positions next to each end.
pub fn split_points(len: usize) -> Vec<usize> {
    let mut points = vec![0, len / 2, len];
    if len > 0 {
        points.push(1);
        points.push(len - 1);
    }
    points.sort_unstable();
    points.dedup();
    points
}
