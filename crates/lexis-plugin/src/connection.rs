//! Connection cost matrix edited by `EditConnectionCostPlugin`s.

use crate::PluginError;

/// Costs of joining a word with right context id `left` to a word with
/// left context id `right`, stored column-major by right id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    matrix: Vec<i16>,
    left_size: usize,
    right_size: usize,
}

impl Connection {
    /// Wrap an existing matrix of `left_size * right_size` costs.
    pub fn new(matrix: Vec<i16>, left_size: usize, right_size: usize) -> Result<Self, PluginError> {
        let expected = Self::cell_count(left_size, right_size)?;
        if matrix.len() != expected {
            return Err(PluginError::invalid(
                "matrix",
                format!(
                    "expected {expected} costs for a {left_size}x{right_size} matrix, got {}",
                    matrix.len()
                ),
            ));
        }
        Ok(Self {
            matrix,
            left_size,
            right_size,
        })
    }

    /// A matrix where every connection costs zero.
    pub fn zeroed(left_size: usize, right_size: usize) -> Result<Self, PluginError> {
        let cells = Self::cell_count(left_size, right_size)?;
        Self::new(vec![0; cells], left_size, right_size)
    }

    fn cell_count(left_size: usize, right_size: usize) -> Result<usize, PluginError> {
        left_size.checked_mul(right_size).ok_or_else(|| {
            PluginError::invalid(
                "matrix",
                format!("a {left_size}x{right_size} matrix does not fit in memory"),
            )
        })
    }

    fn ix(&self, left: usize, right: usize) -> Result<usize, PluginError> {
        if left >= self.left_size || right >= self.right_size {
            return Err(PluginError::ConnectionOutOfRange {
                left,
                right,
                left_size: self.left_size,
                right_size: self.right_size,
            });
        }
        Ok(right * self.left_size + left)
    }

    pub fn cost(&self, left: usize, right: usize) -> Option<i16> {
        self.ix(left, right).ok().map(|i| self.matrix[i])
    }

    pub fn set_cost(&mut self, left: usize, right: usize, cost: i16) -> Result<(), PluginError> {
        let i = self.ix(left, right)?;
        self.matrix[i] = cost;
        Ok(())
    }

    pub fn left_size(&self) -> usize {
        self.left_size
    }

    pub fn right_size(&self) -> usize {
        self.right_size
    }
}
