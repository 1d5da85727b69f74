//! Conditional accumulation of neighbor intensities keyed by center value.
//!
//! The accumulator scans every coordinate in row-major order and, for each
//! pixel whose offset neighbor is in bounds, appends the neighbor intensity
//! to the group keyed by the center pixel's value. The scan order never
//! affects the reduced scalar, but it is fixed so results are reproducible
//! bit for bit.

use std::collections::BTreeMap;

use crate::field::{Displacement, FieldView, Sample};
use crate::util::{VarCondError, VarCondResult};

#[cfg(feature = "rayon")]
pub mod rayon;

/// Neighbor intensities observed for one center value.
pub struct ConditionalGroup {
    center: f64,
    neighbors: Vec<f64>,
}

impl ConditionalGroup {
    pub(crate) fn new(center: f64) -> Self {
        Self {
            center,
            neighbors: Vec::new(),
        }
    }

    /// Returns the center intensity this group is keyed by.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Returns the neighbor intensities in scan (row-major discovery) order.
    pub fn neighbors(&self) -> &[f64] {
        &self.neighbors
    }

    /// Returns the group population.
    pub fn count(&self) -> usize {
        self.neighbors.len()
    }
}

/// Grouped neighbor distribution for one field and displacement.
///
/// Groups are held in a `BTreeMap` keyed by the exact-equality sample key,
/// so iteration (and therefore reduction) order is deterministic.
pub struct ConditionalHistogram {
    pub(crate) groups: BTreeMap<u64, ConditionalGroup>,
    pub(crate) total_pairs: usize,
    pub(crate) disp: Displacement,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl ConditionalHistogram {
    /// Returns the number of distinct center values observed.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Returns the number of in-bounds (center, neighbor) pairs accumulated.
    /// Equals the sum of all group populations.
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    /// Returns the displacement this histogram was built for.
    pub fn displacement(&self) -> Displacement {
        self.disp
    }

    /// Iterates groups in key order.
    pub fn groups(&self) -> impl Iterator<Item = &ConditionalGroup> {
        self.groups.values()
    }
}

/// Scans the field and groups neighbor-at-offset intensities by center value.
///
/// Every cell is visited as a center, so a non-finite sample anywhere in the
/// field fails the call with [`VarCondError::NonFiniteSample`]. Pairs whose
/// neighbor falls outside the field are dropped; when the displacement
/// magnitude reaches the field size the histogram comes back empty and the
/// reduction reports [`VarCondError::NoValidPairs`].
pub fn accumulate<T: Sample>(
    field: FieldView<'_, T>,
    disp: Displacement,
) -> VarCondResult<ConditionalHistogram> {
    let width = field.width();
    let height = field.height();

    let mut groups: BTreeMap<u64, ConditionalGroup> = BTreeMap::new();
    let mut total_pairs = 0usize;

    for r in 0..height {
        let row = field.row(r).expect("row within bounds for scan");
        for (c, &center) in row.iter().enumerate() {
            if !center.is_finite_sample() {
                return Err(VarCondError::NonFiniteSample { row: r, col: c });
            }
            let Some((center, neighbor)) = field.sample_pair(r, c, disp) else {
                continue;
            };
            groups
                .entry(center.group_key())
                .or_insert_with(|| ConditionalGroup::new(center.intensity()))
                .neighbors
                .push(neighbor.intensity());
            total_pairs += 1;
        }
    }

    Ok(ConditionalHistogram {
        groups,
        total_pairs,
        disp,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::accumulate;
    use crate::field::{Displacement, FieldView};

    #[test]
    fn groups_neighbors_by_center_value() {
        // 2x3 field, neighbor to the right.
        let data = [1u8, 2, 1, 1, 3, 4];
        let field = FieldView::from_slice(&data, 3, 2).unwrap();

        let hist = accumulate(field, Displacement::new(1, 0)).unwrap();
        assert_eq!(hist.total_pairs(), 4);
        assert_eq!(hist.num_groups(), 3);

        let groups: Vec<_> = hist.groups().collect();
        assert_eq!(groups[0].center(), 1.0);
        assert_eq!(groups[0].neighbors(), &[2.0, 3.0]);
        assert_eq!(groups[1].center(), 2.0);
        assert_eq!(groups[1].neighbors(), &[1.0]);
        assert_eq!(groups[2].center(), 3.0);
        assert_eq!(groups[2].neighbors(), &[4.0]);
    }

    #[test]
    fn pair_count_matches_clipped_geometry() {
        let data = [0u8; 20];
        let field = FieldView::from_slice(&data, 5, 4).unwrap();

        for (dx, dy) in [(1isize, 0isize), (-2, 1), (0, -3), (4, 3), (0, 0)] {
            let hist = accumulate(field, Displacement::new(dx, dy)).unwrap();
            let expected = (5 - dx.unsigned_abs()) * (4 - dy.unsigned_abs());
            assert_eq!(hist.total_pairs(), expected, "dx={dx} dy={dy}");
        }
    }

    #[test]
    fn oversized_displacement_yields_empty_histogram() {
        let data = [7u8; 12];
        let field = FieldView::from_slice(&data, 4, 3).unwrap();

        let hist = accumulate(field, Displacement::new(4, 0)).unwrap();
        assert_eq!(hist.total_pairs(), 0);
        assert_eq!(hist.num_groups(), 0);

        let hist = accumulate(field, Displacement::new(0, -3)).unwrap();
        assert_eq!(hist.total_pairs(), 0);
    }

    #[test]
    fn non_finite_sample_is_reported_with_position() {
        let data = [1.0f64, 2.0, f64::NAN, 4.0];
        let field = FieldView::from_slice(&data, 2, 2).unwrap();

        let err = accumulate(field, Displacement::new(1, 0)).err().unwrap();
        assert_eq!(
            err,
            crate::util::VarCondError::NonFiniteSample { row: 1, col: 0 }
        );
    }
}
