//! Integration test: end-to-end window scenarios on plain `Vec` arrays.
//!
//! Covers the whole-array push/pop round trip, erasing from a sub-window,
//! the last-element rule for `pop`, resize in both directions, and the
//! hand-off between mutable windows, read-only windows and detached bounds.

use vecwin::{MutableWindow, ReadOnlyWindow, WindowBounds, WindowError};
use vecwin_test_utils::fixtures::{sequence, stepped};

// ── Push / pop ────────────────────────────────────────────────

#[test]
fn push_then_pop_over_whole_array() {
    let mut array = stepped(5, 10);
    {
        let mut w = MutableWindow::new(&mut array);
        w.push(60);
        assert_eq!(w.len(), 6);
        assert_eq!(w.as_slice(), &[10, 20, 30, 40, 50, 60]);

        assert_eq!(w.pop(), Some(60));
        assert_eq!(w.len(), 5);
        assert_eq!(w.as_slice(), &[10, 20, 30, 40, 50]);
    }
    assert_eq!(array, [10, 20, 30, 40, 50]);
}

#[test]
fn pop_takes_last_window_element_not_the_next_one() {
    let mut array = sequence(10);
    let bounds = {
        let mut w = MutableWindow::with_range(&mut array, 3..6);
        assert_eq!(w.pop(), Some(5));
        w.into_bounds()
    };
    assert_eq!(bounds, WindowBounds::new(3, 5));
    assert_eq!(array.len(), 9);
    // Position 6 (value 6) sat just past the window and must survive.
    assert!(array.contains(&6));
    assert!(!array.contains(&5));
}

#[test]
fn pop_until_empty_at_array_end() {
    let mut array = sequence(4);
    let mut w = MutableWindow::with_range(&mut array, 2..4);
    assert_eq!(w.pop(), Some(3));
    assert_eq!(w.pop(), Some(2));
    assert_eq!(w.pop(), None);
    assert_eq!(w.into_bounds(), WindowBounds::new(2, 2));
    assert_eq!(array, [0, 1]);
}

// ── Erase ─────────────────────────────────────────────────────

#[test]
fn erase_inside_sub_window() {
    let mut array = vec![1, 2, 3, 4, 5];
    {
        let mut w = MutableWindow::with_range(&mut array, 1..4);
        assert_eq!(w.as_slice(), &[2, 3, 4]);
        assert_eq!(w.remove(1), 3);
        assert_eq!(w.as_slice(), &[2, 4]);
        assert_eq!(w.len(), 2);
    }
    assert_eq!(array, [1, 2, 4, 5]);
}

#[test]
fn erase_range_keeps_neighbours_in_order() {
    let mut array = sequence(10);
    {
        let mut w = MutableWindow::with_range(&mut array, 2..8);
        w.remove_range(1..4);
        assert_eq!(w.as_slice(), &[2, 6, 7]);
    }
    assert_eq!(array, [0, 1, 2, 6, 7, 8, 9]);
}

#[test]
fn checked_erase_reports_errors() {
    let mut array = sequence(5);
    let mut w = MutableWindow::with_range(&mut array, 1..3);
    assert_eq!(
        w.try_remove(5),
        Err(WindowError::IndexOutOfBounds { index: 5, len: 2 })
    );
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = w.try_remove_range(2..1);
    assert_eq!(inverted, Err(WindowError::InvertedRange { start: 2, end: 1 }));
    assert_eq!(w.as_slice(), &[1, 2]);
}

// ── Insert ────────────────────────────────────────────────────

#[test]
fn insert_grows_by_inserted_count() {
    let mut array = sequence(6);
    {
        let mut w = MutableWindow::with_range(&mut array, 2..4);
        w.insert(1, 100);
        assert_eq!(w.len(), 3);
        w.insert_n(0, 2, 200);
        assert_eq!(w.len(), 5);
        assert_eq!(w.as_slice(), &[200, 200, 2, 100, 3]);
    }
    assert_eq!(array, [0, 1, 200, 200, 2, 100, 3, 4, 5]);
}

// ── Resize ────────────────────────────────────────────────────

#[test]
fn resize_preserves_leading_elements() {
    let mut array = stepped(6, 1);
    {
        let mut w = MutableWindow::with_range(&mut array, 1..4);
        w.resize(6);
        assert_eq!(w.len(), 6);
        assert_eq!(&w.as_slice()[..3], &[2, 3, 4]);
        assert!(w.as_slice()[3..].iter().all(|&x| x == 0));

        w.resize(2);
        assert_eq!(w.as_slice(), &[2, 3]);
    }
    assert_eq!(array, [1, 2, 3, 5, 6]);
}

// ── Read-only windows and bounds ──────────────────────────────

#[test]
fn read_only_window_captures_bounds_by_value() {
    let mut array = sequence(8);
    let snapshot = {
        let w = MutableWindow::with_range(&mut array, 2..5);
        let ro = w.as_read_only();
        assert_eq!(ro.len(), 3);
        assert_eq!(ro.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        ro.bounds()
    };

    // Grow the same window after the snapshot was taken.
    {
        let mut w = MutableWindow::with_range(&mut array, snapshot.range());
        w.push(99);
        w.push(98);
        assert_eq!(w.len(), 5);
    }

    let ro = snapshot.resolve(&array).unwrap();
    assert_eq!(ro.len(), 3);
    assert_eq!(ro.as_slice(), &[2, 3, 4]);
}

#[test]
fn read_only_window_constructors_agree() {
    let array = sequence(6);
    let whole = ReadOnlyWindow::new(&array);
    let ranged = ReadOnlyWindow::from_range(&array, 0..6);
    let resolved = WindowBounds::full(array.len()).resolve(&array).unwrap();
    assert_eq!(whole, ranged);
    assert_eq!(whole, resolved);
    assert_eq!(*whole.back(), 5);
}

#[test]
fn stale_bounds_are_detected_on_resolve() {
    let mut array = sequence(6);
    let bounds = MutableWindow::with_range(&mut array, 3..6).into_bounds();
    array.truncate(4);
    assert_eq!(
        bounds.resolve(&array).unwrap_err(),
        WindowError::RangeOutOfBounds {
            start: 3,
            end: 6,
            len: 4
        }
    );
}

#[test]
fn windows_over_adjacent_ranges_in_turn() {
    let mut array = sequence(6);
    let left = {
        let mut w = MutableWindow::with_range(&mut array, 0..3);
        w.push(10);
        w.into_bounds()
    };
    // The right-hand range moved up by one after the left window grew.
    let right = WindowBounds::new(left.end(), array.len());
    {
        let mut w = MutableWindow::with_range(&mut array, right.range());
        assert_eq!(w.as_slice(), &[3, 4, 5]);
        w.remove(0);
    }
    assert_eq!(array, [0, 1, 2, 10, 4, 5]);
}
