use crate::alignment::distance::DistanceMatrix;
use crate::types::EditOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diagonal,
    Up,
    Left,
}

/// Order in which equally cheap predecessors are taken. The first step with
/// the minimum cost wins, so ties resolve diagonal, then up (delete), then
/// left (insert). Alternate implementations must keep this order to produce
/// identical operation sequences.
const STEP_PREFERENCE: [Step; 3] = [Step::Diagonal, Step::Up, Step::Left];

/// Walk the matrix from the bottom-right cell back to the origin and return
/// the edit operations in source order.
pub fn backtrace(matrix: &DistanceMatrix) -> Vec<EditOp> {
    let mut row = matrix.rows() - 1;
    let mut col = matrix.cols() - 1;
    let mut ops = Vec::with_capacity(row + col);

    while row != 0 || col != 0 {
        let current = matrix.get(row, col);
        let costs = predecessor_costs(matrix, row, col);

        match cheapest_step(costs) {
            Step::Diagonal => {
                ops.push(if costs[0] == current {
                    EditOp::Equal
                } else {
                    EditOp::Substitute
                });
                row -= 1;
                col -= 1;
            }
            Step::Up => {
                ops.push(EditOp::Delete);
                row -= 1;
            }
            Step::Left => {
                ops.push(EditOp::Insert);
                col -= 1;
            }
        }
    }

    ops.reverse();
    ops
}

/// Build the matrix for a pair and backtrace it.
pub fn edit_operations<T: PartialEq>(source: &[T], target: &[T]) -> Vec<EditOp> {
    backtrace(&DistanceMatrix::build(source, target))
}

/// Costs of the diagonal, upper and left predecessors, in `STEP_PREFERENCE`
/// order. On row 0 only a left move exists and on column 0 only an up move;
/// the missing neighbours are priced one above the forced move so it always
/// wins.
#[inline]
fn predecessor_costs(matrix: &DistanceMatrix, row: usize, col: usize) -> [usize; 3] {
    if row != 0 && col != 0 {
        [
            matrix.get(row - 1, col - 1),
            matrix.get(row - 1, col),
            matrix.get(row, col - 1),
        ]
    } else if row == 0 {
        let left = matrix.get(0, col - 1);
        [left + 1, matrix.get(0, col) + 1, left]
    } else {
        let up = matrix.get(row - 1, 0);
        [up + 1, up, matrix.get(row, 0) + 1]
    }
}

#[inline]
fn cheapest_step(costs: [usize; 3]) -> Step {
    let mut best = STEP_PREFERENCE[0];
    let mut best_cost = costs[0];
    for (step, cost) in STEP_PREFERENCE.into_iter().zip(costs).skip(1) {
        if cost < best_cost {
            best = step;
            best_cost = cost;
        }
    }
    best
}
