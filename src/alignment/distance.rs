/// Word-level Levenshtein cost table.
///
/// Cell `(i, j)` holds the minimum number of insertions, deletions and
/// substitutions needed to turn the first `i` source tokens into the first
/// `j` target tokens. Stored row-major in one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    pub fn build<T: PartialEq>(source: &[T], target: &[T]) -> Self {
        let rows = source.len() + 1;
        let cols = target.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            cells[i * cols] = i;
        }
        for j in 1..cols {
            cells[j] = j;
        }

        for i in 1..rows {
            let row_offset = i * cols;
            let up_offset = (i - 1) * cols;
            for j in 1..cols {
                let substitution = usize::from(source[i - 1] != target[j - 1]);
                let deletion = cells[up_offset + j] + 1;
                let insertion = cells[row_offset + j - 1] + 1;
                let diagonal = cells[up_offset + j - 1] + substitution;
                cells[row_offset + j] = deletion.min(insertion).min(diagonal);
            }
        }

        Self { rows, cols, cells }
    }

    /// `len(source) + 1`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `len(target) + 1`
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Total edit distance, i.e. the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

pub fn edit_distance<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    DistanceMatrix::build(source, target).distance()
}
