//! Immutable QAP problem instance.

/// A Quadratic Assignment Problem instance: `size` facilities and
/// locations, an n×n flow matrix and an n×n distance matrix.
///
/// Matrices are stored row-major. Entries are non-negative integers;
/// asymmetric matrices and non-zero diagonals are allowed. An instance is
/// validated on construction and immutable afterwards, so one instance
/// can be shared read-only by any number of independent solver
/// invocations.
#[derive(Debug, Clone)]
pub struct QapInstance {
    size: usize,
    flow: Vec<u64>,
    distance: Vec<u64>,
}

impl QapInstance {
    /// Builds an instance from nested matrix rows.
    ///
    /// Rejects `size < 2` and any row-count or row-length mismatch. This
    /// is the only validation point: solvers assume a well-formed
    /// instance and never re-validate.
    pub fn new(
        size: usize,
        flow: Vec<Vec<u64>>,
        distance: Vec<Vec<u64>>,
    ) -> Result<Self, String> {
        if size < 2 {
            return Err(format!("instance size must be at least 2, got {size}"));
        }
        let flow = flatten(size, flow, "flow")?;
        let distance = flatten(size, distance, "distance")?;
        Ok(Self {
            size,
            flow,
            distance,
        })
    }

    /// Number of facilities (equal to the number of locations).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flow from facility `a` to facility `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn flow(&self, a: usize, b: usize) -> u64 {
        self.flow[a * self.size + b]
    }

    /// Distance from location `i` to location `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> u64 {
        self.distance[i * self.size + j]
    }
}

fn flatten(size: usize, rows: Vec<Vec<u64>>, name: &str) -> Result<Vec<u64>, String> {
    if rows.len() != size {
        return Err(format!(
            "{name} matrix has {} rows, expected {size}",
            rows.len()
        ));
    }
    let mut data = Vec::with_capacity(size * size);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != size {
            return Err(format!(
                "{name} matrix row {i} has {} entries, expected {size}",
                row.len()
            ));
        }
        data.extend(row);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_instance() {
        let instance = QapInstance::new(
            2,
            vec![vec![0, 3], vec![2, 0]],
            vec![vec![0, 1], vec![4, 0]],
        )
        .unwrap();
        assert_eq!(instance.size(), 2);
        assert_eq!(instance.flow(0, 1), 3);
        assert_eq!(instance.flow(1, 0), 2);
        assert_eq!(instance.distance(1, 0), 4);
    }

    #[test]
    fn test_rejects_too_small() {
        let err = QapInstance::new(1, vec![vec![0]], vec![vec![0]]).unwrap_err();
        assert!(err.contains("at least 2"));
    }

    #[test]
    fn test_rejects_row_count_mismatch() {
        let err = QapInstance::new(
            3,
            vec![vec![0, 1, 2], vec![1, 0, 3]],
            vec![vec![0; 3], vec![0; 3], vec![0; 3]],
        )
        .unwrap_err();
        assert!(err.contains("flow"));
    }

    #[test]
    fn test_rejects_ragged_row() {
        let err = QapInstance::new(
            2,
            vec![vec![0, 1], vec![1, 0]],
            vec![vec![0, 1], vec![1]],
        )
        .unwrap_err();
        assert!(err.contains("distance"));
        assert!(err.contains("row 1"));
    }
}
