//! Rectangular text blocks the diagram is composed of.

/// Which child position a block is placed at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A rectangle of text: rows of equal width (in chars).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Block {
    rows: Vec<String>,
    width: usize,
}

impl Block {
    /// Block of a leaf: its label padded by one space, over a blank row.
    pub(crate) fn leaf(label: &str) -> Self {
        let row = format!(" {label} ");
        let width = row.chars().count();
        Self {
            rows: vec![row, " ".repeat(width)],
            width,
        }
    }

    /// Block of a node without children.
    pub(crate) fn placeholder() -> Self {
        Self {
            rows: vec!["/\\".to_string(), "  ".to_string()],
            width: 2,
        }
    }

    /// Block of only spaces.
    pub(crate) fn blank(width: usize, height: usize) -> Self {
        Self {
            rows: vec![" ".repeat(width); height],
            width,
        }
    }

    /// Blank block with the same shape as this one.
    pub(crate) fn blank_like(&self) -> Self {
        Self::blank(self.width, self.height())
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Centers the block into `width` and extends it with blank rows to `height`.
    ///
    /// Odd padding puts the extra space on the outer side: right of a left
    /// child, left of a right child.
    pub(crate) fn padded(self, width: usize, height: usize, side: Side) -> Self {
        let delta = width.saturating_sub(self.width);
        let pad_left = match side {
            Side::Left => delta / 2,
            Side::Right => delta.div_ceil(2),
        };
        let left = " ".repeat(pad_left);
        let right = " ".repeat(delta - pad_left);

        let mut rows: Vec<String> = self.rows.into_iter().map(|row| format!("{left}{row}{right}")).collect();
        let width = self.width + delta;
        if rows.len() < height {
            rows.resize(height, " ".repeat(width));
        }

        Self { rows, width }
    }

    /// Joins two blocks of equal height side by side.
    pub(crate) fn beside(self, right: Block) -> Self {
        debug_assert_eq!(self.height(), right.height());
        let rows = self
            .rows
            .into_iter()
            .zip(right.rows)
            .map(|(left_row, right_row)| left_row + &right_row)
            .collect();

        Self {
            rows,
            width: self.width + right.width,
        }
    }

    /// Puts the branches to two children of width `child_width` on top.
    ///
    /// There are `child_width / 2` rows of branches, widening by one column
    /// per row on each side.
    pub(crate) fn below_branches(self, child_width: usize) -> Self {
        let mut rows = Vec::with_capacity(child_width / 2 + self.height());
        for i in 0..child_width / 2 {
            let outer = " ".repeat(child_width - 1 - i);
            let inner = " ".repeat(i);
            rows.push(format!("{outer}/{inner}{inner}\\{outer}"));
        }
        rows.extend(self.rows);

        Self {
            rows,
            width: self.width,
        }
    }
}
