//! Owned intensity fields.
//!
//! `OwnedField` backs the marshaling paths where the caller hands over data
//! instead of borrowing it: nested rows from a Python sequence, decoded image
//! buffers, CLI inputs. Defaults to `f64` samples.

use crate::field::{FieldView, Sample};
use crate::util::{VarCondError, VarCondResult};

/// Owned, contiguous 2D field.
pub struct OwnedField<T = f64> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Sample> OwnedField<T> {
    /// Creates a field from a row-major buffer of exactly `width * height`
    /// samples.
    pub fn from_vec(data: Vec<T>, width: usize, height: usize) -> VarCondResult<Self> {
        if width == 0 || height == 0 {
            return Err(VarCondError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(VarCondError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(VarCondError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(VarCondError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a field from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> VarCondResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(VarCondError::InvalidDimensions { width, height });
        }
        let mut data = Vec::with_capacity(width * height);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(VarCondError::RaggedRows {
                    row: r,
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_vec(data, width, height)
    }

    /// Returns the field width in samples.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the field height in samples.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major sample buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns a borrowed view of the field.
    pub fn view(&self) -> FieldView<'_, T> {
        FieldView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}
