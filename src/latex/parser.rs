use crate::model::Tree;
use crate::notation::Notation;
use crate::parser::ParsingError;
use crate::tower::TowerParser;
use tracing::debug;

/// LaTeX constructs and their tower notation replacements, applied in order
const LATEX_REWRITES: [(&str, &str); 4] = [("\\left(", "("), ("\\right)", ")"), ("{", "("), ("}", ")")];

/// Parser (configuration) for power towers in LaTeX notation.
///
/// Only `\left(`, `\right)` and braces are recognized: they are rewritten into
/// plain parentheses and the result is parsed as tower notation. Error
/// positions refer to the rewritten text.
///
/// # Configuration
/// * `with_max_depth(max_depth)` - Maximum nesting depth before parsing
///   aborts with [DepthExceeded](crate::parser::ParsingErrorType::DepthExceeded).
///
/// # Example
/// ```
/// use powertower::latex::LatexParser;
/// use powertower::model::Tree;
///
/// let tree = LatexParser::new().parse_str("\\left(1^{3}\\right)^{4}").unwrap();
/// assert_eq!(tree, Tree::node(Tree::node(1, 3), 4));
/// ```
#[derive(Debug, Clone)]
pub struct LatexParser {
    tower_parser: TowerParser,
}

impl LatexParser {
    /// Creates a new `LatexParser` with default settings.
    pub fn new() -> Self {
        Self {
            tower_parser: TowerParser::reporting_as(Notation::Latex),
        }
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.tower_parser = self.tower_parser.with_max_depth(max_depth);
        self
    }

    /// Parses a complete LaTeX string into a [Tree].
    ///
    /// # Errors
    /// Same as [TowerParser::parse_str], reported for [Notation::Latex].
    pub fn parse_str(&self, input: &str) -> Result<Tree, ParsingError> {
        let tower = rewrite_to_tower(input);
        debug!(input, tower = %tower, "Rewrote LaTeX string");
        self.tower_parser.parse_str(&tower)
    }
}

impl Default for LatexParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrites LaTeX grouping into the parentheses of tower notation.
fn rewrite_to_tower(latex: &str) -> String {
    LATEX_REWRITES
        .iter()
        .fold(latex.to_string(), |text, &(from, to)| text.replace(from, to))
}
