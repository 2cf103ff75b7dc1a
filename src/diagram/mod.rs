//! ASCII rendering of power towers as binary graphs.
//!
//! The diagram is built from the leaves up by merging rectangles: each leaf is
//! a small block with its label, and each node places the blocks of its two
//! children side by side (centering the narrower one) and draws the branches
//! `/` and `\` on top.
//!
//! ```text
//!      /\
//!     /  \
//!    /    \
//!   /\     8
//!  2  4
//! ```

mod block;

use crate::model::{Node, Tree};
use block::{Block, Side};
use std::fmt;
use thiserror::Error;

/// Default maximum number of chars a checked diagram may consist of
pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

/// Error for trees whose diagram would be too large to render.
///
/// Every tree level doubles the width of the diagram and adds half of it in
/// branch rows, so the area grows fourfold per level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Diagram of {width}x{height} chars exceeds the limit of {limit} chars")]
pub struct DiagramTooLarge {
    pub width: usize,
    pub height: usize,
    pub limit: usize,
}

// =#========================================================================#=
// DIAGRAM
// =#========================================================================#=
/// Rendered ASCII diagram of a tree; all lines have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    lines: Vec<String>,
}

impl Diagram {
    /// Returns the lines of the diagram, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the diagram and returns its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns the width of each line, in chars.
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |line| line.chars().count())
    }

    /// Returns the number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Renders a tree as an ASCII diagram.
///
/// # Example
/// ```
/// use powertower::diagram::to_diagram;
/// use powertower::model::Tree;
///
/// let diagram = to_diagram(&Tree::node(1, 2));
/// assert_eq!(diagram.lines(), ["  /\\  ", " 1  2 ", "      "]);
/// ```
pub fn to_diagram(tree: &Tree) -> Diagram {
    Diagram {
        lines: render_tree(tree).into_rows(),
    }
}

/// Renders a tree as an ASCII diagram if it has at most `max_cells` chars.
///
/// The size is computed before any rendering, see [diagram_size].
///
/// # Example
/// ```
/// use powertower::diagram::{DEFAULT_MAX_CELLS, try_to_diagram};
/// use powertower::parse_tower;
///
/// let small = parse_tower("1^2^3").unwrap();
/// assert!(try_to_diagram(&small, DEFAULT_MAX_CELLS).is_ok());
///
/// let chain = (1..=20).map(|i| i.to_string()).collect::<Vec<_>>().join("^");
/// let err = try_to_diagram(&parse_tower(&chain).unwrap(), DEFAULT_MAX_CELLS).unwrap_err();
/// assert!(err.width > 1_000_000);
/// ```
pub fn try_to_diagram(tree: &Tree, max_cells: usize) -> Result<Diagram, DiagramTooLarge> {
    let (width, height) = diagram_size(tree);
    if width.saturating_mul(height) > max_cells {
        return Err(DiagramTooLarge {
            width,
            height,
            limit: max_cells,
        });
    }

    Ok(to_diagram(tree))
}

/// Returns `(width, height)` of the diagram of a tree without rendering it.
///
/// Saturates at `usize::MAX` for trees too large to address.
pub fn diagram_size(tree: &Tree) -> (usize, usize) {
    match tree {
        Tree::Leaf(leaf) => (leaf.to_string().chars().count() + 2, 2),
        Tree::Node(node) => {
            let (left, right) = (node.left().map(diagram_size), node.right().map(diagram_size));
            let (width, height) = match (left, right) {
                (None, None) => return (2, 2),
                (Some(size), None) | (None, Some(size)) => size,
                (Some(left), Some(right)) => (left.0.max(right.0), left.1.max(right.1)),
            };
            (width.saturating_mul(2), height.saturating_add(width / 2))
        }
    }
}

fn render_tree(tree: &Tree) -> Block {
    match tree {
        Tree::Leaf(leaf) => Block::leaf(&leaf.to_string()),
        Tree::Node(node) => render_node(node),
    }
}

fn render_node(node: &Node) -> Block {
    let left = node.left().map(render_tree);
    let right = node.right().map(render_tree);

    // A missing child is stood in for by blanks of its sibling's shape
    let (left, right) = match (left, right) {
        (None, None) => return Block::placeholder(),
        (Some(left), None) => {
            let right = left.blank_like();
            (left, right)
        }
        (None, Some(right)) => (right.blank_like(), right),
        (Some(left), Some(right)) => (left, right),
    };

    let width = left.width().max(right.width());
    let height = left.height().max(right.height());
    let left = left.padded(width, height, Side::Left);
    let right = right.padded(width, height, Side::Right);

    left.beside(right).below_branches(width)
}
