//! Benchmark profiles for vecwin windows.
//!
//! Provides pre-built array layouts shared by the criterion benches:
//!
//! - [`centered_profile`]: a window over the middle third of the array
//! - [`tail_profile`]: a window ending at the array's end (no suffix to shift)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vecwin::WindowBounds;

/// A backing array and the bounds of the window to open over it.
pub struct Profile {
    pub array: Vec<u64>,
    pub bounds: WindowBounds,
}

/// `len` elements with the window over the middle third.
pub fn centered_profile(len: usize) -> Profile {
    let third = len / 3;
    Profile {
        array: (0..len as u64).collect(),
        bounds: WindowBounds::new(third, len - third),
    }
}

/// `len` elements with the window over the last half, touching the end.
pub fn tail_profile(len: usize) -> Profile {
    Profile {
        array: (0..len as u64).collect(),
        bounds: WindowBounds::new(len / 2, len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_profile_leaves_prefix_and_suffix() {
        let p = centered_profile(9);
        assert_eq!(p.bounds, WindowBounds::new(3, 6));
        assert_eq!(p.array.len(), 9);
    }

    #[test]
    fn tail_profile_reaches_array_end() {
        let p = tail_profile(10);
        assert_eq!(p.bounds.end(), p.array.len());
    }
}
