// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset generators on the half-unit grid.
//!
//! All generators place points on the grid `{0.5, 1.0, …, 9.5}²`, keeping
//! coordinates strictly inside the data frame and off its edges. Positions
//! are distinct within one dataset.
//!
//! The uniform generator guarantees both classes are represented: the first
//! point is labelled [`Label::A`], the second [`Label::B`], and the rest are
//! coin flips. The diagonal and quadratic generators relabel uniform
//! positions by a separating curve, producing datasets a small tree can
//! classify exactly.

use alloc::vec::Vec;
use rand::Rng;

use crate::{Label, LabeledPoint};

/// Snaps a uniform sample in `[0, 1)` onto the half-unit grid.
///
/// Written with an integer round so the crate stays `no_std` (no
/// `f64::round`). The sample is non-negative, so truncation of `v + 0.5`
/// is round-half-up.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the scaled sample lies in [0.5, 18.5); truncating it is the intended rounding"
)]
fn grid_coord<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let steps = (rng.random::<f64>() * 18.0 + 0.5) as u32;
    f64::from(steps) / 2.0 + 0.5
}

fn label_for_index<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Label {
    match index {
        0 => Label::A,
        1 => Label::B,
        _ => {
            if rng.random_bool(0.5) {
                Label::A
            } else {
                Label::B
            }
        }
    }
}

/// Generates `n` distinct, uniformly placed points with random labels.
///
/// The first two points carry one label each so that neither class is empty.
pub fn random_dataset<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<LabeledPoint> {
    let mut data: Vec<LabeledPoint> = Vec::with_capacity(n);
    while data.len() < n {
        let x = grid_coord(rng);
        let y = grid_coord(rng);
        if data.iter().any(|p| p.pos.x == x && p.pos.y == y) {
            continue;
        }
        let label = label_for_index(data.len(), rng);
        data.push(LabeledPoint::new(x, y, label));
    }
    data
}

/// Generates `n` points labelled by the diagonal: `A` below it (`x > y`), `B` above.
pub fn diagonal_dataset<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<LabeledPoint> {
    let mut data = random_dataset(n, rng);
    for p in &mut data {
        p.label = if p.pos.x > p.pos.y { Label::A } else { Label::B };
    }
    data
}

/// Generates `n` points split by the parabola `y = 0.3x² − 3x + 10`.
pub fn quadratic_dataset<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<LabeledPoint> {
    let mut data = random_dataset(n, rng);
    for p in &mut data {
        let curve = 0.3 * p.pos.x * p.pos.x - 3.0 * p.pos.x + 10.0;
        p.label = if curve > p.pos.y { Label::A } else { Label::B };
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_frame;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x71c4_e7)
    }

    #[test]
    fn random_dataset_has_distinct_grid_points() {
        let mut rng = rng();
        let data = random_dataset(20, &mut rng);
        assert_eq!(data.len(), 20);
        for (i, p) in data.iter().enumerate() {
            assert!(data_frame().contains(p.pos), "point outside the frame");
            // Grid coordinates are exact half-units.
            assert_eq!((p.pos.x * 2.0) % 1.0, 0.0, "x off the half-unit grid");
            assert_eq!((p.pos.y * 2.0) % 1.0, 0.0, "y off the half-unit grid");
            for q in &data[..i] {
                assert!(p.pos != q.pos, "duplicate position");
            }
        }
    }

    #[test]
    fn random_dataset_represents_both_classes() {
        let mut rng = rng();
        let data = random_dataset(2, &mut rng);
        assert_eq!(data[0].label, Label::A);
        assert_eq!(data[1].label, Label::B);
    }

    #[test]
    fn diagonal_dataset_is_separable_by_the_diagonal() {
        let mut rng = rng();
        for p in diagonal_dataset(15, &mut rng) {
            let expect = if p.pos.x > p.pos.y { Label::A } else { Label::B };
            assert_eq!(p.label, expect);
        }
    }

    #[test]
    fn quadratic_dataset_is_separable_by_the_curve() {
        let mut rng = rng();
        for p in quadratic_dataset(15, &mut rng) {
            let curve = 0.3 * p.pos.x * p.pos.x - 3.0 * p.pos.x + 10.0;
            let expect = if curve > p.pos.y { Label::A } else { Label::B };
            assert_eq!(p.label, expect);
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_fixed_seed() {
        let a = random_dataset(10, &mut rng());
        let b = random_dataset(10, &mut rng());
        assert_eq!(a, b);
    }
}
