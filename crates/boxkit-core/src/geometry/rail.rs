//! Rail-sequence builders.
//!
//! A "rail" is a coordinate along one axis marking a panel boundary, a
//! corner-saver inset, or a joint edge. Panel recipes describe one half (or
//! one run) of a layout as a list of lengths and turn it into absolute
//! coordinates here.

/// Running total of `lengths`; one output coordinate per input.
///
/// `coords[i] = lengths[0] + ... + lengths[i]`. For strictly positive
/// lengths the result is strictly increasing.
pub fn summation_sequence(lengths: &[f64]) -> Vec<f64> {
    let mut seq = Vec::with_capacity(lengths.len());
    let mut acc = 0.0;
    for length in lengths {
        acc += length;
        seq.push(acc);
    }
    seq
}

/// The summation sequence reflected about zero: the negated-and-reversed
/// half followed by the positive half, `2 * lengths.len()` coordinates.
///
/// Lays out a mirrored pair of rail grids (left/right or above/below a
/// center line) from one half-description.
pub fn symmetric_mirrored_summation_sequence(lengths: &[f64]) -> Vec<f64> {
    let seq = summation_sequence(lengths);
    let mut mirrored: Vec<f64> = seq.iter().rev().map(|x| -x).collect();
    mirrored.extend_from_slice(&seq);
    mirrored
}
