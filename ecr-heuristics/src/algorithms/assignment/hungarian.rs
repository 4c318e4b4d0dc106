#[cfg(test)]
#[path = "../../../tests/unit/algorithms/assignment/hungarian_test.rs"]
mod hungarian_test;

use super::Assignment;
use crate::utils::{Float, GenericResult};

/// Solves a rectangular min-cost assignment problem using the Hungarian algorithm with
/// potentials in `O(n^2 * m)` time.
///
/// Every row gets a distinct column when there are not more rows than columns, otherwise every
/// column gets a distinct row. All costs have to be finite: callers are expected to replace
/// forbidden pairs with a large finite penalty.
pub fn solve_assignment(costs: &[Vec<Float>]) -> GenericResult<Assignment> {
    let rows = costs.len();
    let cols = costs.first().map_or(0, |row| row.len());

    if rows == 0 || cols == 0 {
        return Err("cannot solve assignment for empty cost matrix".into());
    }

    if costs.iter().any(|row| row.len() != cols) {
        return Err("cost matrix rows have different length".into());
    }

    if costs.iter().flatten().any(|cost| !cost.is_finite()) {
        return Err("cost matrix contains non finite values".into());
    }

    let pairs = if rows <= cols {
        solve_wide(rows, cols, |row, col| costs[row][col])?
    } else {
        let mut pairs = solve_wide(cols, rows, |row, col| costs[col][row])?
            .into_iter()
            .map(|(col, row)| (row, col))
            .collect::<Vec<_>>();
        pairs.sort_unstable();
        pairs
    };

    let cost = pairs.iter().map(|&(row, col)| costs[row][col]).sum();

    Ok(Assignment { pairs, cost })
}

/// Solves assignment for matrix where `rows <= cols`. Uses one-based indices internally with
/// index zero reserved for a fictive row/column.
fn solve_wide<F>(rows: usize, cols: usize, cost: F) -> GenericResult<Vec<(usize, usize)>>
where
    F: Fn(usize, usize) -> Float,
{
    let mut u = vec![0.; rows + 1];
    let mut v = vec![0.; cols + 1];
    // row matched to given column
    let mut matched = vec![0_usize; cols + 1];
    let mut way = vec![0_usize; cols + 1];

    for row in 1..=rows {
        matched[0] = row;
        let mut col0 = 0_usize;
        let mut min_values = vec![Float::MAX; cols + 1];
        let mut used = vec![false; cols + 1];

        loop {
            used[col0] = true;
            let row0 = matched[col0];
            let mut delta = Float::MAX;
            let mut col1 = 0_usize;

            for col in 1..=cols {
                if used[col] {
                    continue;
                }

                let current = cost(row0 - 1, col - 1) - u[row0] - v[col];
                if current < min_values[col] {
                    min_values[col] = current;
                    way[col] = col0;
                }

                if min_values[col] < delta {
                    delta = min_values[col];
                    col1 = col;
                }
            }

            if col1 == 0 || !delta.is_finite() {
                return Err("assignment problem is degenerate".into());
            }

            for col in 0..=cols {
                if used[col] {
                    u[matched[col]] += delta;
                    v[col] -= delta;
                } else {
                    min_values[col] -= delta;
                }
            }

            col0 = col1;
            if matched[col0] == 0 {
                break;
            }
        }

        // unwind augmenting path
        loop {
            let col1 = way[col0];
            matched[col0] = matched[col1];
            col0 = col1;
            if col0 == 0 {
                break;
            }
        }
    }

    let mut pairs = (1..=cols).filter(|&col| matched[col] != 0).map(|col| (matched[col] - 1, col - 1)).collect::<Vec<_>>();
    pairs.sort_unstable();

    Ok(pairs)
}
