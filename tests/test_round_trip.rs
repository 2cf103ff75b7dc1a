use powertower::model::Tree;
use powertower::{Notation, parse_bracket, parse_latex, parse_tower, to_bracket, to_latex, to_tower};
use rstest::rstest;

// --- Shared cases: tree with its (bracket, tower, LaTeX) strings ---
fn cases() -> Vec<(Tree, [&'static str; 3])> {
    vec![
        (
            Tree::node(3.1, Tree::node(4.1, Tree::node(5.9, 2.6))),
            [
                "((3.1)((4.1)((5.9)(2.6))))",
                "3.1^4.1^5.9^2.6",
                "3.1^{4.1^{5.9^{2.6}}}",
            ],
        ),
        (
            Tree::node(2, Tree::node(Tree::node(3, 5), Tree::node(Tree::node(Tree::node("w", "x"), "y"), "z"))),
            [
                "((2)(((3)(5))((((w)(x))(y))(z))))",
                "2^(3^5)^((w^x)^y)^z",
                "2^{\\left(3^{5}\\right)^{\\left(\\left(w^{x}\\right)^{y}\\right)^{z}}}",
            ],
        ),
        (
            Tree::node(1, Tree::node(2, Tree::node("a", Tree::node("b", "c")))),
            ["((1)((2)((a)((b)(c)))))", "1^2^a^b^c", "1^{2^{a^{b^{c}}}}"],
        ),
        (
            Tree::node(
                Tree::node(Tree::node(Tree::node(3, Tree::node(1, 4)), Tree::node(1, 5)), 9),
                Tree::node(Tree::node(2, 6), 5),
            ),
            [
                "(((((3)((1)(4)))((1)(5)))(9))(((2)(6))(5)))",
                "(((3^1^4)^1^5)^9)^(2^6)^5",
                "\\left(\\left(\\left(3^{1^{4}}\\right)^{1^{5}}\\right)^{9}\\right)^{\\left(2^{6}\\right)^{5}}",
            ],
        ),
        (
            Tree::node(Tree::node(-3, 2.5), Tree::node("k", -0.5)),
            ["((((-3))(2.5))((k)((-0.5))))", "((-3)^2.5)^k^(-0.5)", "\\left((-3)^{2.5}\\right)^{k^{(-0.5)}}"],
        ),
    ]
}

// --- TESTS TREE -> STRING ---
#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn test_format_all_notations(#[case] index: usize) {
    let cases = cases();
    let (tree, [bracket, tower, latex]) = &cases[index];
    assert_eq!(to_bracket(tree), *bracket);
    assert_eq!(to_tower(tree), *tower);
    assert_eq!(to_latex(tree), *latex);
}

// --- TESTS STRING -> TREE ---
#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn test_parse_all_notations(#[case] index: usize) {
    let cases = cases();
    let (tree, [bracket, tower, latex]) = &cases[index];
    assert_eq!(&parse_bracket(bracket).unwrap(), tree);
    assert_eq!(&parse_tower(tower).unwrap(), tree);
    assert_eq!(&parse_latex(latex).unwrap(), tree);
}

// --- TESTS CONVERSION BETWEEN NOTATIONS ---
#[rstest]
fn test_convert_between_notations(
    #[values(0, 1, 2, 3, 4)] index: usize,
    #[values(Notation::Bracket, Notation::Tower, Notation::Latex)] from: Notation,
    #[values(Notation::Bracket, Notation::Tower, Notation::Latex)] to: Notation,
) {
    let cases = cases();
    let (_, strings) = &cases[index];
    let position = |notation: Notation| Notation::ALL.iter().position(|n| *n == notation).unwrap();

    let tree = from.parse(strings[position(from)]).unwrap();
    assert_eq!(to.format(&tree), strings[position(to)]);
}

#[rstest]
fn test_parses_agree_across_notations(#[values(0, 1, 2, 3, 4)] index: usize) {
    let cases = cases();
    let (tree, _) = &cases[index];
    let from_bracket = parse_bracket(to_bracket(tree)).unwrap();
    let from_tower = parse_tower(to_tower(tree)).unwrap();
    let from_latex = parse_latex(to_latex(tree)).unwrap();

    assert_eq!(from_bracket, from_tower);
    assert_eq!(from_tower, from_latex);
}

#[rstest]
fn test_string_round_trip_is_stable(#[values(0, 1, 2, 3, 4)] index: usize) {
    let cases = cases();
    let (_, strings) = &cases[index];
    for (notation, string) in Notation::ALL.into_iter().zip(strings) {
        let reparsed = notation.parse(string).unwrap();
        assert_eq!(notation.format(&reparsed), *string, "{notation} round trip");
    }
}

#[test]
fn test_single_leaf_round_trips() {
    for leaf in [Tree::from(7), Tree::from(-7), Tree::from(0.25), Tree::from("omega")] {
        for notation in Notation::ALL {
            let written = notation.format(&leaf);
            assert_eq!(notation.parse(&written).unwrap(), leaf, "{notation}: {written}");
        }
    }
}

#[test]
fn test_whole_floats_stay_floats() {
    let tree = Tree::node(2.0, 10.0);
    assert_eq!(to_tower(&tree), "2.0^10.0");
    for notation in Notation::ALL {
        let reparsed = notation.parse(notation.format(&tree).as_str()).unwrap();
        assert_eq!(notation.format(&reparsed), notation.format(&tree));
    }
}
