//! Intensity fields and displacement-aware access.
//!
//! `FieldView` is a borrowed 2D view into a 1D sample buffer with an explicit
//! stride. The stride counts elements between the starts of consecutive rows,
//! so a stride larger than the width represents padded rows. `sample_pair`
//! implements the clipping boundary policy: a (center, neighbor) pair whose
//! neighbor coordinate falls outside the field is dropped, never wrapped or
//! reflected.

use crate::util::{VarCondError, VarCondResult};

pub mod owned;
pub mod sample;

#[cfg(feature = "image-io")]
pub mod io;

pub use owned::OwnedField;
pub use sample::Sample;

/// Signed offset from a center pixel to its paired neighbor, in grid
/// coordinates: `dx` moves along columns, `dy` along rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Displacement {
    /// Column offset of the neighbor.
    pub dx: isize,
    /// Row offset of the neighbor.
    pub dy: isize,
}

impl Displacement {
    /// Creates a displacement. Any pair of integers is syntactically valid;
    /// whether it yields valid pairs depends on the field it is applied to.
    pub fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }

    /// Returns the displacement with both signs swapped. The flipped
    /// displacement revisits the same unordered pixel pairs with center and
    /// neighbor roles exchanged.
    pub fn flipped(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// Borrowed 2D field view with an explicit stride.
#[derive(Copy, Clone)]
pub struct FieldView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> FieldView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> VarCondResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> VarCondResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(VarCondError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the field width in samples.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the field height in samples.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns a contiguous slice for row `r` with length `width`.
    pub fn row(&self, r: usize) -> Option<&'a [T]> {
        if r >= self.height {
            return None;
        }
        let start = r.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy view of the sub-region anchored at `(r, c)`.
    pub fn roi(
        &self,
        r: usize,
        c: usize,
        height: usize,
        width: usize,
    ) -> VarCondResult<FieldView<'a, T>> {
        if width == 0 || height == 0 {
            return Err(VarCondError::InvalidDimensions { width, height });
        }

        let oob = VarCondError::RoiOutOfBounds {
            row: r,
            col: c,
            height,
            width,
            field_height: self.height,
            field_width: self.width,
        };
        if r >= self.height || c >= self.width {
            return Err(oob);
        }
        let end_r = r.checked_add(height).ok_or_else(|| oob.clone())?;
        let end_c = c.checked_add(width).ok_or_else(|| oob.clone())?;
        if end_r > self.height || end_c > self.width {
            return Err(oob);
        }

        let start = r
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(c))
            .ok_or(VarCondError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self.data.get(start..).ok_or(VarCondError::BufferTooSmall {
            needed: start.saturating_add(1),
            got: self.data.len(),
        })?;

        FieldView::new(data, width, height, self.stride)
    }
}

impl<'a, T: Copy> FieldView<'a, T> {
    /// Returns the sample at `(r, c)` if it is within bounds.
    pub fn get(&self, r: usize, c: usize) -> Option<T> {
        if r >= self.height || c >= self.width {
            return None;
        }
        let idx = r.checked_mul(self.stride)?.checked_add(c)?;
        self.data.get(idx).copied()
    }

    /// Returns the (center, neighbor) samples for the pixel at `(r, c)` and
    /// the given displacement, or `None` when the neighbor coordinate
    /// `(r + dy, c + dx)` lies outside the field (clipping policy).
    ///
    /// Pure: no side effects, no interior mutation.
    pub fn sample_pair(&self, r: usize, c: usize, disp: Displacement) -> Option<(T, T)> {
        let center = self.get(r, c)?;
        let nr = (r as isize).checked_add(disp.dy)?;
        let nc = (c as isize).checked_add(disp.dx)?;
        if nr < 0 || nc < 0 {
            return None;
        }
        let neighbor = self.get(nr as usize, nc as usize)?;
        Some((center, neighbor))
    }
}

impl<'a, T: Sample> FieldView<'a, T> {
    /// Returns the mean intensity over the whole field.
    pub fn mean(&self) -> f64 {
        let mut sum = 0.0;
        for r in 0..self.height {
            let row = self.row(r).expect("row within bounds for mean");
            for &value in row {
                sum += value.intensity();
            }
        }
        sum / (self.width * self.height) as f64
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> VarCondResult<usize> {
    if width == 0 || height == 0 {
        return Err(VarCondError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(VarCondError::InvalidStride { width, stride });
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(VarCondError::InvalidDimensions { width, height })?;
    Ok(needed)
}
