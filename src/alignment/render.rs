use std::fmt;

use serde::Serialize;

use crate::alignment::backtrace::edit_operations;
use crate::types::EditOp;

const GAP: &str = "*";
const BAR: &str = "|";

/// Four equal-length rows of centered cells: source tokens, bars, target
/// tokens and operation labels. Gaps are rendered as `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub source: Vec<String>,
    pub bars: Vec<String>,
    pub target: Vec<String>,
    pub codes: Vec<String>,
}

impl Alignment {
    pub fn column_count(&self) -> usize {
        self.source.len()
    }

    pub fn rows(&self) -> [&[String]; 4] {
        [
            self.source.as_slice(),
            self.bars.as_slice(),
            self.target.as_slice(),
            self.codes.as_slice(),
        ]
    }

    fn push_column(&mut self, source: &str, target: &str, code: &str) {
        let width = [source, BAR, target, code]
            .iter()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0);
        self.source.push(center(source, width));
        self.bars.push(center(BAR, width));
        self.target.push(center(target, width));
        self.codes.push(center(code, width));
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Render the edit path between two token sequences as a column-aligned
/// block.
pub fn render_alignment<S: AsRef<str>>(source: &[S], target: &[S]) -> Alignment {
    let source: Vec<&str> = source.iter().map(AsRef::as_ref).collect();
    let target: Vec<&str> = target.iter().map(AsRef::as_ref).collect();
    render_operations(&source, &target, &edit_operations(&source, &target))
}

/// Render an already computed operation sequence. Cursors that run past the
/// end of their sequence render an empty cell instead of failing.
pub fn render_operations(source: &[&str], target: &[&str], ops: &[EditOp]) -> Alignment {
    let mut alignment = Alignment::default();
    let mut i = 0usize;
    let mut j = 0usize;

    for &op in ops {
        let source_cell = source.get(i).copied().unwrap_or_default();
        let target_cell = target.get(j).copied().unwrap_or_default();

        match op {
            EditOp::Delete => {
                alignment.push_column(source_cell, GAP, op.alignment_label());
                i += 1;
            }
            EditOp::Insert => {
                alignment.push_column(GAP, target_cell, op.alignment_label());
                j += 1;
            }
            EditOp::Equal | EditOp::Substitute => {
                alignment.push_column(source_cell, target_cell, op.alignment_label());
                i += 1;
                j += 1;
            }
        }
    }

    alignment
}

/// Center `text` in a field of `width` characters. With odd padding and an
/// odd width the extra space goes on the left, otherwise on the right.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;

    let mut out = String::with_capacity(text.len() + margin);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn deletion_renders_gap_on_target_side() {
        let alignment = render_alignment(&words("a b"), &words("a"));

        assert_eq!(alignment.column_count(), 2);
        assert_eq!(alignment.source, ["a", "b"]);
        assert_eq!(alignment.bars, ["|", "|"]);
        assert_eq!(alignment.target, ["a", "*"]);
        assert_eq!(alignment.codes, [" ", "D"]);
    }

    #[test]
    fn insertion_renders_gap_on_source_side() {
        let alignment = render_alignment(&words("the sat"), &words("the cat sat"));

        assert_eq!(alignment.source, ["the", " * ", "sat"]);
        assert_eq!(alignment.target, ["the", "cat", "sat"]);
        assert_eq!(alignment.codes, ["   ", " I ", "   "]);
    }

    #[test]
    fn columns_pad_to_widest_cell() {
        let alignment = render_alignment(&words("I have 3 cats"), &words("I have three cats"));

        assert_eq!(alignment.source, ["I", "have", "  3  ", "cats"]);
        assert_eq!(alignment.target, ["I", "have", "three", "cats"]);
        assert_eq!(alignment.codes, [" ", "    ", "  S  ", "    "]);
        for row in alignment.rows() {
            assert_eq!(row.len(), 4);
        }
        for column in 0..alignment.column_count() {
            let widths: Vec<usize> = alignment
                .rows()
                .iter()
                .map(|row| row[column].chars().count())
                .collect();
            assert!(widths.windows(2).all(|w| w[0] == w[1]), "column {column}");
        }
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let alignment = render_alignment(&words("ёж"), &words("еж"));
        assert_eq!(alignment.source, ["ёж"]);
        assert_eq!(alignment.bars, ["| "]);
        assert_eq!(alignment.codes, ["S "]);
    }

    #[test]
    fn centering_matches_classic_convention() {
        assert_eq!(center("S", 2), "S ");
        assert_eq!(center("|", 4), " |  ");
        assert_eq!(center("ab", 5), "  ab ");
        assert_eq!(center("a", 5), "  a  ");
        assert_eq!(center("toolong", 3), "toolong");
    }

    #[test]
    fn exhausted_cursors_render_empty_cells() {
        let ops = [EditOp::Equal, EditOp::Substitute];
        let alignment = render_operations(&["a"], &["a"], &ops);
        assert_eq!(alignment.column_count(), 2);
        assert_eq!(alignment.source[1], " ");
        assert_eq!(alignment.target[1], " ");
        assert_eq!(alignment.codes[1], "S");
    }

    #[test]
    fn display_joins_cells_per_row() {
        let alignment = render_alignment(&words("a b"), &words("a"));
        assert_eq!(alignment.to_string(), "a b\n| |\na *\n  D\n");
    }
}
