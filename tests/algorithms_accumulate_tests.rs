//! Tests for streaming accumulation: clamping, atomic appends, auxiliary
//! consistency, and the freeze into a calibration set.

use ringfit::prelude::*;

#[test]
fn test_clamp_policy_window() {
    let clamp = ClampPolicy::<f64>::default();
    assert_eq!(clamp.apply(0.1), 0.0);
    assert_eq!(clamp.apply(0.19), 0.0);
    assert_eq!(clamp.apply(0.2), 0.2);
    assert_eq!(clamp.apply(1.0), 1.0);
    assert_eq!(clamp.apply(3.0), 3.0);
    assert_eq!(clamp.apply(5.0), 3.0);
}

#[test]
fn test_append_and_finish_alignment() {
    let mut events = RingAccumulator::new(2);
    events.append(&[1.0, 4.0], 10.0, None).unwrap();
    events.append(&[2.0, 5.0], 20.0, None).unwrap();
    events.append(&[3.0, 6.0], 30.0, None).unwrap();

    let set = events.finish();
    assert_eq!(set.rings(), 2);
    assert_eq!(set.events(), 3);
    assert_eq!(set.matrix().row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(set.matrix().row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(set.reference(), &[10.0, 20.0, 30.0]);
    assert!(set.auxiliary().is_none());
}

#[test]
fn test_append_wrong_ring_count_is_recoverable() {
    let mut events = RingAccumulator::new(3);
    events.append(&[1.0, 2.0, 3.0], 5.0, None).unwrap();

    let err = events.append(&[1.0, 2.0], 6.0, None).unwrap_err();
    assert_eq!(
        err,
        CalibrationError::InvalidInput {
            got: 2,
            expected: 3,
        }
    );
    // The rejected event left no trace; the stream continues.
    assert_eq!(events.events(), 1);
    events.append(&[4.0, 5.0, 6.0], 7.0, None).unwrap();

    let set = events.finish();
    assert_eq!(set.events(), 2);
    assert_eq!(set.reference(), &[5.0, 7.0]);
}

#[test]
fn test_append_hits_clamps_before_summation() {
    let mut events = RingAccumulator::new(3);
    // Ring 0: 0.1 is floored to 0, 1.0 passes. Ring 2: 5.0 saturates at
    // 3.0, 1.5 passes.
    events
        .append_hits(&[(0, 0.1), (0, 1.0), (2, 5.0), (2, 1.5)], 42.0, None)
        .unwrap();

    let set = events.finish();
    assert_eq!(set.matrix().row(0), &[1.0]);
    assert_eq!(set.matrix().row(1), &[0.0]);
    assert_eq!(set.matrix().row(2), &[4.5]);
    assert_eq!(set.reference(), &[42.0]);
}

#[test]
fn test_append_hits_rejects_out_of_range_ring() {
    let mut events = RingAccumulator::new(2);
    let err = events
        .append_hits(&[(0, 1.0), (2, 1.0)], 1.0, None)
        .unwrap_err();
    assert_eq!(err, CalibrationError::InvalidRingIndex { got: 2, rings: 2 });
    assert_eq!(events.events(), 0);
}

#[test]
fn test_auxiliary_presence_is_sticky() {
    let mut events = RingAccumulator::new(2);
    events.append(&[1.0, 2.0], 10.0, Some(4.5)).unwrap();

    let err = events.append(&[3.0, 4.0], 20.0, None).unwrap_err();
    assert_eq!(err, CalibrationError::InconsistentAuxiliary { event: 1 });

    events.append(&[3.0, 4.0], 20.0, Some(6.5)).unwrap();
    let set = events.finish();
    assert_eq!(set.auxiliary(), Some(&[4.5, 6.5][..]));
}

#[test]
fn test_growth_past_capacity_keeps_events() {
    let mut events = RingAccumulator::with_capacity(2, 2);
    events.append(&[5.0, 5.0], 1.0, None).unwrap();
    events.append(&[6.0, 6.0], 2.0, None).unwrap();
    events.append(&[7.0, 7.0], 3.0, None).unwrap();

    let set = events.finish();
    assert_eq!(set.events(), 3);
    assert_eq!(set.matrix().row(0), &[5.0, 6.0, 7.0]);
    assert_eq!(set.matrix().row(1), &[5.0, 6.0, 7.0]);
    assert_eq!(set.reference(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_custom_clamp_window() {
    let mut events = RingAccumulator::new(1).with_clamp(ClampPolicy::new(0.5, 2.0));
    events.append_hits(&[(0, 0.4), (0, 1.0), (0, 9.0)], 0.0, None).unwrap();
    let set = events.finish();
    // 0.4 floored, 1.0 kept, 9.0 capped at 2.0.
    assert_eq!(set.matrix().get(0, 0), 3.0);
}

#[test]
fn test_set_assembly_validates_alignment() {
    let matrix = RingMatrix::from_rows(&[vec![1.0, 2.0]]).unwrap();
    let err = CalibrationSet::new(matrix.clone(), vec![1.0], None).unwrap_err();
    assert_eq!(
        err,
        CalibrationError::DimensionMismatch {
            context: "calibration set reference",
            expected: 2,
            got: 1,
        }
    );

    let set = CalibrationSet::new(matrix, vec![1.0, 2.0], Some(vec![0.5, 0.7])).unwrap();
    assert_eq!(set.auxiliary(), Some(&[0.5, 0.7][..]));
}
