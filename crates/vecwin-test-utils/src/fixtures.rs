//! Reusable array fixtures.

/// `[0, 1, ..., len - 1]`.
pub fn sequence(len: u32) -> Vec<u32> {
    (0..len).collect()
}

/// `[step, 2 * step, ..., len * step]`, e.g. `stepped(5, 10) == [10, 20, 30, 40, 50]`.
pub fn stepped(len: u32, step: u32) -> Vec<u32> {
    (1..=len).map(|i| i * step).collect()
}

/// An array with capacity equal to its length, so the next growth relocates.
pub fn tight(values: &[u32]) -> Vec<u32> {
    let mut v = Vec::with_capacity(values.len());
    v.extend_from_slice(values);
    v.shrink_to_fit();
    v
}
