//! Rayon-parallel accumulation (feature-gated).
//!
//! Partitions the scan by rows, with each worker building a partial grouping
//! for its row. Partials are merged in row order, so the resulting histogram
//! holds the same groups with neighbors in the same row-major discovery order
//! as the sequential scan and reduces to a bit-identical scalar.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::field::{Displacement, FieldView, Sample};
use crate::hist::{ConditionalGroup, ConditionalHistogram};
use crate::util::{VarCondError, VarCondResult};

/// Row-parallel equivalent of [`crate::hist::accumulate`].
pub fn accumulate_par<T: Sample + Sync>(
    field: FieldView<'_, T>,
    disp: Displacement,
) -> VarCondResult<ConditionalHistogram> {
    let width = field.width();
    let height = field.height();

    let partials: Vec<VarCondResult<(BTreeMap<u64, ConditionalGroup>, usize)>> = (0..height)
        .into_par_iter()
        .map(|r| {
            let row = field.row(r).expect("row within bounds for scan");
            let mut groups: BTreeMap<u64, ConditionalGroup> = BTreeMap::new();
            let mut pairs = 0usize;
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
                pairs += 1;
            }
            Ok((groups, pairs))
        })
        .collect();

    let mut groups: BTreeMap<u64, ConditionalGroup> = BTreeMap::new();
    let mut total_pairs = 0usize;
    for partial in partials {
        let (row_groups, row_pairs) = partial?;
        for (key, group) in row_groups {
            match groups.entry(key) {
                std::collections::btree_map::Entry::Occupied(mut entry) => {
                    entry.get_mut().neighbors.extend(group.neighbors);
                }
                std::collections::btree_map::Entry::Vacant(entry) => {
                    entry.insert(group);
                }
            }
        }
        total_pairs += row_pairs;
    }

    Ok(ConditionalHistogram {
        groups,
        total_pairs,
        disp,
        width,
        height,
    })
}
