use powertower::bracket::{BracketParser, parse_str, to_bracket};
use powertower::model::{Leaf, Node, Tree};
use powertower::parser::ParsingErrorType;
use powertower::Notation;

// --- TESTS BRACKET PARSING ---
#[test]
fn test_parse_nested_left_subtrees() {
    let tree = parse_str("(((((3)((1)(4)))((1)(5)))(9))(((2)(6))(5)))").unwrap();
    let expected = Tree::node(
        Tree::node(Tree::node(Tree::node(3, Tree::node(1, 4)), Tree::node(1, 5)), 9),
        Tree::node(Tree::node(2, 6), 5),
    );
    assert_eq!(tree, expected);
    assert_eq!(tree.to_string(), "(((3^1^4)^1^5)^9)^(2^6)^5");
}

#[test]
fn test_parse_bare_token() {
    assert_eq!(parse_str("42").unwrap(), Tree::from(42));
    assert_eq!(parse_str("  x ").unwrap(), Tree::from("x"));
    assert_eq!(parse_str("(-3)").unwrap(), Tree::from(-3));
}

#[test]
fn test_parse_leaf_types() {
    let tree = parse_str("((7)((2.5)(pi)))").unwrap();
    let node = tree.as_node().unwrap();
    assert_eq!(node.left().unwrap().as_leaf(), Some(&Leaf::Integer(7)));

    let exponent = node.right().unwrap().as_node().unwrap();
    assert!(matches!(exponent.left().unwrap().as_leaf(), Some(Leaf::Float(_))));
    assert_eq!(exponent.right().unwrap().as_leaf(), Some(&Leaf::Symbol("pi".to_string())));
}

#[test]
fn test_parse_ignores_surrounding_whitespace() {
    assert_eq!(parse_str("  ((1)(2))\n").unwrap(), Tree::node(1, 2));
}

#[test]
fn test_parse_negative_leaves() {
    let tree = parse_str("(((-3))((-0.5)))").unwrap();
    assert_eq!(tree, Tree::node(-3, -0.5));
}

// --- TESTS BRACKET ERRORS ---
#[test]
fn test_extra_closing_paren() {
    let err = parse_str("((1)(2)))").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::ImbalancedParen);
    assert_eq!(err.notation(), Notation::Bracket);
    assert_eq!(err.position(), 7);
}

#[test]
fn test_unclosed_paren() {
    let err = parse_str("((1)(2)").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::ImbalancedParen);

    let err = parse_str("((1)(2))(").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::ImbalancedParen);
}

#[test]
fn test_three_groups() {
    let err = parse_str("((1)(2)(3))").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::ImbalancedOrArity { groups: 3 });
}

#[test]
fn test_empty_group() {
    let err = parse_str("()").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::ImbalancedOrArity { groups: 0 });
}

#[test]
fn test_empty_input() {
    let err = parse_str("   ").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::EmptyOperand);
}

#[test]
fn test_error_message_names_notation() {
    let err = parse_str("((1)(2)(3))").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Invalid bracket string"), "{message}");
    assert!(message.contains("found 3"), "{message}");
}

#[test]
fn test_max_depth() {
    let deep = format!("{}1{}", "(".repeat(40), ")".repeat(40));
    assert_eq!(parse_str(&deep).unwrap(), Tree::from(1));

    let err = BracketParser::new().with_max_depth(10).parse_str(&deep).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::DepthExceeded { limit: 10 });
}

#[test]
fn test_very_deep_input_fails_cleanly() {
    let deep = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    let err = parse_str(&deep).unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::DepthExceeded { .. }));
}

// --- TESTS SINGLE-CHILD NODES ---
#[test]
fn test_single_child_nodes_are_written() {
    assert_eq!(to_bracket(&Tree::from(Node::with_left(1))), "((1))");
    assert_eq!(to_bracket(&Tree::from(Node::with_right(Tree::node(1, 2)))), "(((1)(2)))");
    assert_eq!(to_bracket(&Tree::from(Node::default())), "()");
}

#[test]
fn test_single_child_nodes_collapse_into_child() {
    let wrapped = Tree::from(Node::with_left(Tree::node(1, 2)));
    assert_eq!(parse_str(to_bracket(&wrapped)).unwrap(), Tree::node(1, 2));

    let inner = Tree::node(Tree::from(Node::with_left(1)), 2);
    assert_eq!(to_bracket(&inner), "(((1))(2))");
    assert_eq!(parse_str(to_bracket(&inner)).unwrap(), Tree::node(1, 2));
}
