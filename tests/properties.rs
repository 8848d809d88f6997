use proptest::prelude::*;
use retrace::{
    AndExt, BoxedExt, BoxedParser, CaptureExt, Cursor, Expected, FilterExt, LabelExt, ManyExt,
    MapExt, OptionalExt, ParseConfig, ParseError, Parser, SomeExt, SpannedExt, any_char, any_of,
    between, between_chars, eof, eps, inter, is_char, is_string, lazy, negate, none_of, parse,
    parse_with,
};
use std::rc::Rc;

/// Shape of a randomly generated grammar over the alphabet `{a, b, c}`
#[derive(Debug, Clone)]
enum Tree {
    Char(char),
    Str(String),
    AnyChar,
    Range(char, char),
    Eof,
    Eps,
    Seq(Box<Tree>, Box<Tree>),
    Choice(Vec<Tree>),
    Many(Box<Tree>),
    Some(Box<Tree>),
    Optional(Box<Tree>),
    Negate(Box<Tree>),
    NoneOf(Vec<Tree>),
    Inter(Box<Tree>, Box<Tree>),
    Between(Box<Tree>, Box<Tree>, Box<Tree>),
    EvenSpan(Box<Tree>),
    Label(Box<Tree>),
    Lazy(Box<Tree>),
    Spanned(Box<Tree>),
}

fn build<'code>(tree: &Tree) -> BoxedParser<'code, 'code, ()> {
    match tree {
        Tree::Char(c) => is_char(*c).map(|_| ()).boxed(),
        Tree::Str(s) => is_string(s.clone()).map(|_| ()).boxed(),
        Tree::AnyChar => any_char().map(|_| ()).boxed(),
        Tree::Range(lo, hi) => between_chars(*lo, *hi).map(|_| ()).boxed(),
        Tree::Eof => eof().boxed(),
        Tree::Eps => eps().boxed(),
        Tree::Seq(a, b) => build(a).and(build(b)).map(|_| ()).boxed(),
        Tree::Choice(trees) => {
            let alternatives: Vec<_> = trees.iter().map(|t| build(t)).collect();
            any_of(alternatives).boxed()
        }
        Tree::Many(a) => build(a).many().map(|_| ()).boxed(),
        Tree::Some(a) => build(a).some().map(|_| ()).boxed(),
        Tree::Optional(a) => build(a).optional().map(|_| ()).boxed(),
        Tree::Negate(a) => negate(build(a)).boxed(),
        Tree::NoneOf(trees) => {
            let excluded: Vec<_> = trees.iter().map(|t| build(t)).collect();
            none_of(excluded).map(|_| ()).boxed()
        }
        Tree::Inter(a, sep) => inter(build(a), build(sep)).map(|_| ()).boxed(),
        Tree::Between(open, a, close) => between(build(open), build(a), build(close)).boxed(),
        Tree::EvenSpan(a) => build(a)
            .stry()
            .filter(|s: &&str| s.len() % 2 == 0, "even span")
            .map(|_| ())
            .boxed(),
        Tree::Label(a) => build(a).label("rule").boxed(),
        Tree::Lazy(a) => {
            let inner = Rc::new(build(a));
            lazy(move || Rc::clone(&inner)).boxed()
        }
        Tree::Spanned(a) => build(a).spanned().map(|_| ()).boxed(),
    }
}

fn symbol() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['a', 'b', 'c'])
}

fn leaf() -> impl Strategy<Value = Tree> {
    prop_oneof![
        4 => symbol().prop_map(Tree::Char),
        2 => "[abc]{0,3}".prop_map(Tree::Str),
        1 => Just(Tree::AnyChar),
        1 => (symbol(), symbol()).prop_map(|(a, b)| Tree::Range(a.min(b), a.max(b))),
        1 => Just(Tree::Eof),
        1 => Just(Tree::Eps),
    ]
}

fn tree() -> impl Strategy<Value = Tree> {
    leaf().prop_recursive(4, 24, 3, |inner| {
        let boxed = inner.clone().prop_map(Box::new);
        prop_oneof![
            (boxed.clone(), boxed.clone()).prop_map(|(a, b)| Tree::Seq(a, b)),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Tree::Choice),
            boxed.clone().prop_map(Tree::Many),
            boxed.clone().prop_map(Tree::Some),
            boxed.clone().prop_map(Tree::Optional),
            boxed.clone().prop_map(Tree::Negate),
            prop::collection::vec(inner.clone(), 1..3).prop_map(Tree::NoneOf),
            (boxed.clone(), boxed.clone()).prop_map(|(a, sep)| Tree::Inter(a, sep)),
            (boxed.clone(), boxed.clone(), boxed.clone())
                .prop_map(|(open, a, close)| Tree::Between(open, a, close)),
            boxed.clone().prop_map(Tree::EvenSpan),
            boxed.clone().prop_map(Tree::Label),
            boxed.clone().prop_map(Tree::Lazy),
            boxed.prop_map(Tree::Spanned),
        ]
    })
}

fn input() -> impl Strategy<Value = String> {
    "[abc]{0,8}"
}

proptest! {
    #[test]
    fn failure_leaves_cursor_untouched(shape in tree(), input in input(), skip in 0usize..3) {
        let parser = build(&shape);
        let mut cursor = Cursor::new(&input);
        cursor.advance(skip.min(input.len()));
        let start = cursor.position();

        match parser.parse(&mut cursor) {
            Ok(()) => prop_assert!(cursor.position() >= start),
            Err(_) => prop_assert_eq!(cursor.position(), start),
        }
    }

    #[test]
    fn sequence_associates_on_consumed_input(
        a in tree(),
        b in tree(),
        c in tree(),
        input in input(),
    ) {
        let left = build(&a).and(build(&b)).and(build(&c)).stry();
        let right = build(&a).and(build(&b).and(build(&c))).stry();
        let mut left_cursor = Cursor::new(&input);
        let mut right_cursor = Cursor::new(&input);

        prop_assert_eq!(
            left.parse(&mut left_cursor).ok(),
            right.parse(&mut right_cursor).ok()
        );
        prop_assert_eq!(left_cursor.position(), right_cursor.position());
    }

    #[test]
    fn choice_prefers_first_success(a in tree(), b in tree(), input in input()) {
        let choice = any_of((build(&a).stry(), build(&b).stry()));
        let first = build(&a).stry().parse(&mut Cursor::new(&input)).ok();
        let second = build(&b).stry().parse(&mut Cursor::new(&input)).ok();

        prop_assert_eq!(choice.parse(&mut Cursor::new(&input)).ok(), first.or(second));
    }

    #[test]
    fn capture_is_the_consumed_prefix(a in tree(), input in input()) {
        let mut cursor = Cursor::new(&input);
        if let Ok(text) = build(&a).stry().parse(&mut cursor) {
            prop_assert_eq!(text, &input[..cursor.position()]);
        }

        let mut cursor = Cursor::new(&input);
        if let Ok(((), span)) = build(&a).spanned().parse(&mut cursor) {
            prop_assert_eq!(span.start, 0);
            prop_assert_eq!(span.end, cursor.position());
        }
    }

    #[test]
    fn some_succeeds_iff_one_repetition_does(a in tree(), input in input()) {
        let once = build(&a).parse(&mut Cursor::new(&input)).is_ok();
        let mut many_cursor = Cursor::new(&input);
        let mut some_cursor = Cursor::new(&input);

        let many = build(&a).many().parse(&mut many_cursor);
        let some = build(&a).some().parse(&mut some_cursor);

        prop_assert!(many.is_ok());
        prop_assert_eq!(some.is_ok(), once);
        if once {
            prop_assert_eq!(many.map(|v| v.len()), some.map(|v| v.len()));
            prop_assert_eq!(many_cursor.position(), some_cursor.position());
        } else {
            prop_assert_eq!(many_cursor.position(), 0);
        }
    }

    #[test]
    fn negate_never_consumes(a in tree(), input in input()) {
        let matched = build(&a).parse(&mut Cursor::new(&input)).is_ok();
        let mut cursor = Cursor::new(&input);

        prop_assert_eq!(negate(build(&a)).parse(&mut cursor).is_ok(), !matched);
        prop_assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn none_of_consumes_exactly_one_char(a in tree(), input in input()) {
        let excluded = build(&a).parse(&mut Cursor::new(&input)).is_ok();
        let mut cursor = Cursor::new(&input);

        match none_of([build(&a)]).parse(&mut cursor) {
            Ok(c) => {
                prop_assert!(!excluded);
                prop_assert_eq!(input.chars().next(), Some(c));
                prop_assert_eq!(cursor.position(), c.len_utf8());
            }
            Err(_) => {
                prop_assert!(excluded || input.is_empty());
                prop_assert_eq!(cursor.position(), 0);
            }
        }
    }

    #[test]
    fn failed_runs_explain_themselves(a in tree(), input in input()) {
        if let Err(error) = parse(build(&a), &input) {
            let position = error.fail_position();
            prop_assert!(position.is_some_and(|p| p <= input.len()));
            prop_assert!(!error.expected().is_empty());
        }
    }

    #[test]
    fn tracking_does_not_change_outcomes(a in tree(), input in input()) {
        let parser = build(&a);
        let tracked = parse(&parser, &input).is_ok();
        let quiet = parse_with(&parser, &input, &ParseConfig::quiet()).is_ok();

        prop_assert_eq!(tracked, quiet);
        prop_assert_eq!(parse(&parser, &input).is_ok(), tracked);
    }
}

#[test]
fn choice_prefers_first_and_fails_at_top_level() {
    let choice = any_of((is_string("a"), is_string("ab")));
    let mut cursor = Cursor::new("ab");

    assert_eq!(choice.parse(&mut cursor), Ok("a"));
    assert_eq!(cursor.remaining(), "b");
    assert!(matches!(
        parse(&choice, "ab"),
        Err(ParseError::TrailingInput { position: 1, .. })
    ));
}

#[test]
fn many_and_some_on_empty_input() {
    let mut cursor = Cursor::new("");
    assert_eq!(is_char('a').many().parse(&mut cursor), Ok(vec![]));
    assert_eq!(cursor.position(), 0);

    assert!(is_char('a').some().parse(&mut Cursor::new("")).is_err());
}

#[test]
fn many_and_some_stop_before_mismatch() {
    let mut many_cursor = Cursor::new("aaab");
    let mut some_cursor = Cursor::new("aaab");

    assert_eq!(
        is_char('a').many().parse(&mut many_cursor),
        Ok(vec!['a', 'a', 'a'])
    );
    assert_eq!(
        is_char('a').some().parse(&mut some_cursor),
        Ok(vec!['a', 'a', 'a'])
    );
    assert_eq!(many_cursor.remaining(), "b");
    assert_eq!(some_cursor.remaining(), "b");
}

#[test]
fn negate_on_matching_and_other_input() {
    let parser = negate(is_string("ab"));

    let mut cursor = Cursor::new("ab");
    assert!(parser.parse(&mut cursor).is_err());
    assert_eq!(cursor.position(), 0);
    assert_eq!(
        cursor.diagnostics().map(|d| d.expected().to_vec()),
        Some(vec![Expected::NotFollowedBy])
    );

    let mut cursor = Cursor::new("xy");
    assert_eq!(parser.parse(&mut cursor), Ok(()));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn capture_returns_text_not_structure() {
    let pair = is_string("a").and(is_string("b"));
    assert_eq!(parse(pair.stry(), "ab"), Ok("ab"));
}

#[test]
fn full_consumption_is_required() {
    assert!(parse(is_string("a"), "ab").is_err());
    assert_eq!(parse(is_string("a"), "a"), Ok("a"));
}

#[test]
fn sequence_of_literals_yields_pair() {
    assert_eq!(
        parse(is_string("a").and(is_string("b")), "ab"),
        Ok(("a", "b"))
    );
}

#[test]
fn literal_longer_than_input_is_a_mismatch() {
    let mut cursor = Cursor::new("ab");
    assert!(is_string("abcdef").parse(&mut cursor).is_err());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn repeated_runs_do_not_interfere() {
    let parser = is_char('a').and(is_char('b'));

    let first = parse(&parser, "ax").unwrap_err();
    let second = parse(&parser, "xx").unwrap_err();

    assert_eq!(first.fail_position(), Some(1));
    assert_eq!(second.fail_position(), Some(0));
    assert_eq!(second.expected(), &[Expected::Char('a')]);
}
