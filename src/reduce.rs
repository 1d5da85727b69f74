//! Reduction of the grouped distribution into the scalar descriptor.
//!
//! Per group the population variance (mean of squared deviations from the
//! group's own mean, divide by n) is used: groups are aggregated across the
//! whole field rather than treated as independent statistical samples, and
//! the reference numerics carry no Bessel correction. The aggregate weights
//! each group by its population, giving E[Var(neighbor | center)].

use crate::hist::{ConditionalGroup, ConditionalHistogram};
use crate::util::{VarCondError, VarCondResult};

impl ConditionalGroup {
    /// Returns the population variance of the group's neighbor intensities.
    /// A singleton group has no deviation and contributes exactly 0.
    pub fn population_variance(&self) -> f64 {
        let neighbors = self.neighbors();
        let n = neighbors.len();
        if n <= 1 {
            return 0.0;
        }
        let mean = neighbors.iter().sum::<f64>() / n as f64;
        let sq_dev = neighbors
            .iter()
            .map(|&v| {
                let d = v - mean;
                d * d
            })
            .sum::<f64>();
        sq_dev / n as f64
    }
}

impl ConditionalHistogram {
    /// Aggregates per-group variances into the scalar descriptor:
    /// `sum(count_g * var_g) / sum(count_g)`.
    ///
    /// Fails with [`VarCondError::NoValidPairs`] when no pair survived the
    /// boundary clipping, rather than dividing by zero.
    pub fn weighted_variance(&self) -> VarCondResult<f64> {
        if self.total_pairs == 0 {
            return Err(VarCondError::NoValidPairs {
                dx: self.disp.dx,
                dy: self.disp.dy,
                width: self.width,
                height: self.height,
            });
        }
        let mut weighted = 0.0f64;
        for group in self.groups() {
            weighted += group.count() as f64 * group.population_variance();
        }
        Ok(weighted / self.total_pairs as f64)
    }
}
