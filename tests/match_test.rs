/// This file contains the match tests for both pattern dialects.
///
/// Each test compiles a single pattern and matches it once against the start of the input.
/// The expected result is the captured text or `None` if the pattern must not match.
use lexfa::{Compiler, Dialect};

/// Test data for the match tests.
/// The test data consists of the dialect, a pattern, an input string, the expected capture, and an
/// optional error message.
#[derive(Debug)]
struct TestData {
    dialect: Dialect,
    pattern: &'static str,
    input: &'static str,
    expected: Option<&'static str>,
    error_msg: Option<&'static str>,
}

// A macros to easily create a TestData struct.

// Valid regex, input, and expected capture.
macro_rules! td {
    ($pattern:expr, $input:expr, $expected:expr) => {
        TestData {
            dialect: Dialect::Regex,
            pattern: $pattern,
            input: $input,
            expected: $expected,
            error_msg: None,
        }
    };
}

// Valid glob, input, and expected capture.
macro_rules! tg {
    ($pattern:expr, $input:expr, $expected:expr) => {
        TestData {
            dialect: Dialect::Glob,
            pattern: $pattern,
            input: $input,
            expected: $expected,
            error_msg: None,
        }
    };
}

// Invalid regex and expected error message.
macro_rules! te {
    ($pattern:expr, $result:expr) => {
        TestData {
            dialect: Dialect::Regex,
            pattern: $pattern,
            input: "",
            expected: None,
            error_msg: Some($result),
        }
    };
}

const TEST_DATA: &[TestData] = &[
    // ---------------------------------------------------------------------------------------------
    // Alternatives
    // ---------------------------------------------------------------------------------------------
    td!(r"a|b", "", None),
    td!(r"a|b", "a", Some("a")),
    td!(r"a|b", "b", Some("b")),
    td!(r"a|b", "ab", Some("a")),
    td!(r"a|b", "ba", Some("b")),
    td!(r"a|b", "c", None),
    td!(r"a|", "", Some("")),
    td!(r"a|", "a", Some("a")),
    td!(r"(a)|b", "b", Some("b")),
    td!(r"(a)|bc", "bc", Some("bc")),
    // ---------------------------------------------------------------------------------------------
    // Character classes
    // ---------------------------------------------------------------------------------------------
    td!(r"[]]", "", None),
    td!(r"[]]", "]", Some("]")),
    td!(r"[a]", "", None),
    td!(r"[a]", "a", Some("a")),
    td!(r"[a]", "b", None),
    td!(r"[ab]", "", None),
    td!(r"[ab]", "a", Some("a")),
    td!(r"[ab]", "b", Some("b")),
    td!(r"[ab]", "c", None),
    td!(r"[a-c]", "", None),
    td!(r"[a-c]", "a", Some("a")),
    td!(r"[a-c]", "b", Some("b")),
    td!(r"[a-c]", "c", Some("c")),
    td!(r"[a-c]", "d", None),
    td!(r"[ab]ab", "a", None),
    td!(r"[ab]ab", "aa", None),
    td!(r"[ab]ab", "aaa", None),
    td!(r"[ab]ab", "aaab", None),
    td!(r"[ab]ab", "aab", Some("aab")),
    td!(r"[ab]ab", "aaba", Some("aab")),
    td!(r"[ab]ab", "aabb", Some("aab")),
    td!(r"[ab]ab", "ab", None),
    td!(r"[ab]ab", "abab", None),
    td!(r"[ab]ab", "b", None),
    td!(r"[ab]ab", "baab", None),
    td!(r"[ab]ab", "bab", Some("bab")),
    td!(r"[ab]ab", "baba", Some("bab")),
    td!(r"[ab]ab", "babb", Some("bab")),
    td!(r"[ab]ab", "bbab", None),
    td!(r"[a-c]1[d-f]2", "a1d2y", Some("a1d2")),
    td!(r"[a-c]1[d-f]2", "b1e2y", Some("b1e2")),
    td!(r"[a-c]1[d-f]2", "c1f2y", Some("c1f2")),
    td!(r"[a-c]1[d-f]2", "a1b2", None),
    td!(r"[a-c]1[d-f]2", "d1e2", None),
    td!(r"[\]\-]+", "]-]x", Some("]-]")),
    td!(r"[.*+]+", "+*.a", Some("+*.")),
    // ---------------------------------------------------------------------------------------------
    // Negated character classes
    // ---------------------------------------------------------------------------------------------
    td!(r"[^a]", "a", None),
    td!(r"[^a]", "b", Some("b")),
    td!(r"[^a-c]+", "xyzab", Some("xyz")),
    td!(r"[^]]", "]", None),
    td!(r"[^]]", "[", Some("[")),
    td!(r#""[^"]*""#, r#""abc"def""#, Some(r#""abc""#)),
    td!(r"[a^]", "^", Some("^")),
    // ---------------------------------------------------------------------------------------------
    // Escapes
    // ---------------------------------------------------------------------------------------------
    td!(r"\(", "(", Some("(")),
    td!(r"\)", ")", Some(")")),
    td!(r"\*", "*", Some("*")),
    td!(r"\+", "+", Some("+")),
    td!(r"\-", "-", Some("-")),
    td!(r"\.", ".", Some(".")),
    td!(r"\?", "?", Some("?")),
    td!(r"\[", "[", Some("[")),
    td!(r"\]", "]", Some("]")),
    td!(r"\\", "\\", Some("\\")),
    td!(r"\\'", "\\'", Some("\\'")),
    td!(r"\^", "^", Some("^")),
    td!(r"\{", "{", Some("{")),
    td!(r"\|", "|", Some("|")),
    td!(r"\}", "}", Some("}")),
    td!(r"\n", "\n", Some("\n")),
    td!(r"\r", "\r", Some("\r")),
    td!(r"\t", "\t", Some("\t")),
    td!(r"\.", "a", None),
    // ---------------------------------------------------------------------------------------------
    // Literals and metacharacters without special meaning at their position
    // ---------------------------------------------------------------------------------------------
    td!(r"ab", "a", None),
    td!(r"ab", "aa", None),
    td!(r"ab", "ab", Some("ab")),
    td!(r"ab", "aba", Some("ab")),
    td!(r"ab", "abb", Some("ab")),
    td!(r"ab", "bb", None),
    td!(r")", ")", Some(")")),
    td!(r"a-b,c", "a-b,c", Some("a-b,c")),
    td!(r"}{1}", "}", Some("}")),
    td!(r"ä", "ä", Some("ä")),
    // ---------------------------------------------------------------------------------------------
    // Groups and mixed quantifiers
    // ---------------------------------------------------------------------------------------------
    td!(r"()", "", Some("")),
    td!(r"(a)", "a", Some("a")),
    td!(r"a(b)c", "abc", Some("abc")),
    td!(r"a(bc)d", "abcd", Some("abcd")),
    td!(r"a(bc)?d", "ad", Some("ad")),
    td!(r"a(bc)?d", "abcd", Some("abcd")),
    td!(r"a(bc)?d", "abcbcd", None),
    td!(r"a(bc)+d", "ad", None),
    td!(r"a(bc)+d", "abcd", Some("abcd")),
    td!(r"a(bc)+d", "abcbcd", Some("abcbcd")),
    td!(r"a(bc)*d", "ad", Some("ad")),
    td!(r"a(bc)*d", "abcd", Some("abcd")),
    td!(r"a(bc)*d", "abcbcd", Some("abcbcd")),
    td!(r"a(b|c)*d", "ad", Some("ad")),
    td!(r"a(b|c)*d", "abd", Some("abd")),
    td!(r"a(b|c)*d", "acd", Some("acd")),
    td!(r"a(b|c)*d", "abccbd", Some("abccbd")),
    td!(r"a(b|c){1,2}d", "ad", None),
    td!(r"a(b|c){1,2}d", "abd", Some("abd")),
    td!(r"a(b|c){1,2}d", "abcd", Some("abcd")),
    td!(r"a(b|c){1,2}d", "abbbd", None),
    td!(r"[0-9]{0,2}(a|b){1,2}", "a", Some("a")),
    td!(r"[0-9]{0,2}(a|b){1,2}", "0ba", Some("0ba")),
    td!(r"[0-9]{0,2}(a|b){1,2}", "45a", Some("45a")),
    td!(r"[0-9]{0,2}(a|b){1,2}", "782bb", None),
    td!(r"[0-9]{0,2}(a|b){1,2}", "72", None),
    td!(r"a(b(c){3}d){2}e", "abcccdbcccde", Some("abcccdbcccde")),
    td!(r"(a|b)(c|d)", "ab", None),
    td!(r"(a|b)(c|d)", "ac", Some("ac")),
    td!(r"(a|b)(c|d)", "ad", Some("ad")),
    td!(r"(a|b)(c|d)", "bc", Some("bc")),
    td!(r"(a|b)(c|d)", "bd", Some("bd")),
    td!(r"(a|b)(c|d)", "cd", None),
    td!(r"(a*|b)c", "aac", Some("aac")),
    td!(r"(a*|b)c", "bc", Some("bc")),
    td!(r"(a*|b)c", "abc", None),
    td!(r"(a|b)*", "abba", Some("abba")),
    // ---------------------------------------------------------------------------------------------
    // Repeat specifiers
    // ---------------------------------------------------------------------------------------------
    td!(r"a{0}b", "b", Some("b")),
    td!(r"a{0}b", "ab", None),
    td!(r"a{1}", "", None),
    td!(r"a{1}", "a", Some("a")),
    td!(r"a{1}", "aa", Some("a")),
    td!(r"a{3}", "aa", None),
    td!(r"a{3}", "aaa", Some("aaa")),
    td!(r"a{3}", "aaaa", Some("aaa")),
    td!(r"a{1,2}", "", None),
    td!(r"a{1,2}", "a", Some("a")),
    td!(r"a{1,2}", "aa", Some("aa")),
    td!(r"a{1,2}", "aaa", Some("aa")),
    td!(r"a{,1}", "", Some("")),
    td!(r"a{,1}", "a", Some("a")),
    td!(r"a{,1}", "aa", Some("a")),
    td!(r"a{1,}", "", None),
    td!(r"a{1,}", "a", Some("a")),
    td!(r"a{1,}", "aa", Some("aa")),
    td!(r"a{2,}b", "ab", None),
    td!(r"a{2,}b", "aaaab", Some("aaaab")),
    td!(r"a{,}", "aaa", Some("aaa")),
    // ---------------------------------------------------------------------------------------------
    // One or more, zero or more, zero or one, wildcard
    // ---------------------------------------------------------------------------------------------
    td!(r"a+", "", None),
    td!(r"a+", "a", Some("a")),
    td!(r"a+", "aa", Some("aa")),
    td!(r"a+", "aaaaa", Some("aaaaa")),
    td!(r"a+", "aaab", Some("aaa")),
    td!(r"a+", "b", None),
    td!(r"a*", "", Some("")),
    td!(r"a*", "a", Some("a")),
    td!(r"a*", "aa", Some("aa")),
    td!(r"a*", "aaaaa", Some("aaaaa")),
    td!(r"a*", "aaab", Some("aaa")),
    td!(r"a*", "b", Some("")),
    td!(r"a?", "", Some("")),
    td!(r"a?", "a", Some("a")),
    td!(r"a?", "aa", Some("a")),
    td!(r"a?", "b", Some("")),
    td!(r".", "a", Some("a")),
    td!(r".", "b", Some("b")),
    td!(r".", "\n", Some("\n")),
    td!(r".", "", None),
    td!(r".*", "any text", Some("any text")),
    td!(r"a.c", "abc", Some("abc")),
    // ---------------------------------------------------------------------------------------------
    // Syntax errors
    // ---------------------------------------------------------------------------------------------
    te!(r"[a", "unfinished characters class at position 3"),
    te!(r"a{1", "expected end of repeat specifier at position 4"),
    te!(r"a{a", "expected end of repeat specifier at position 3"),
    te!(r"a{2,1}", "invalid repeat sequence at position 6"),
    te!(r"a{1,1,1}", "expected end of repeat specifier at position 6"),
    te!(r"\i", "unrecognized character at position 0"),
    te!(r"(a", "unfinished parenthesis at position 3"),
    te!(r"[a-", "unfinished characters class at position 4"),
    te!(r"[b-a]", "invalid characters range at position 4"),
    // ---------------------------------------------------------------------------------------------
    // Globs
    // ---------------------------------------------------------------------------------------------
    tg!(r"[]]", "", None),
    tg!(r"[]]", "]", Some("]")),
    tg!(r"[a]", "a", Some("a")),
    tg!(r"[a]", "b", None),
    tg!(r"[ab]", "b", Some("b")),
    tg!(r"[ab]", "c", None),
    tg!(r"[a-c]", "c", Some("c")),
    tg!(r"[a-c]", "d", None),
    tg!(r"[ab]ab", "aab", Some("aab")),
    tg!(r"[ab]ab", "aaba", Some("aab")),
    tg!(r"[ab]ab", "bab", Some("bab")),
    tg!(r"[ab]ab", "ab", None),
    tg!(r"[ab]ab", "bbab", None),
    tg!(r"[a-c]1[d-f]2", "a1d2y", Some("a1d2")),
    tg!(r"[a-c]1[d-f]2", "a1b2", None),
    tg!(r"[!a]", "a", None),
    tg!(r"[!a]", "b", Some("b")),
    tg!(r"\*", "*", Some("*")),
    tg!(r"\?", "?", Some("?")),
    tg!(r"\[", "[", Some("[")),
    tg!(r"\]", "]", Some("]")),
    tg!(r"\\'", "\\'", Some("\\'")),
    tg!(r"\!", "!", Some("!")),
    tg!(r"", "", Some("")),
    tg!(r"a", "a", Some("a")),
    tg!(r"a", "b", None),
    tg!(r"abc", "abc", Some("abc")),
    tg!(r"abc", "xabc", None),
    tg!(r"(a|b)+.", "(a|b)+.", Some("(a|b)+.")),
    tg!(r"?", "", None),
    tg!(r"?", "a", Some("a")),
    tg!(r"?", "b", Some("b")),
    tg!(r"*", "", Some("")),
    tg!(r"*", "a", Some("a")),
    tg!(r"*", "abc", Some("abc")),
    tg!(r"*.rs", "main.rs", Some("main.rs")),
    tg!(r"*.rs", "main.rs.bak", Some("main.rs")),
    tg!(r"*.rs", "main.r", None),
    tg!(r"a?c", "abc", Some("abc")),
];

#[test]
fn match_test() {
    let _ = env_logger::builder().is_test(true).try_init();

    for (test_number, test_data) in TEST_DATA.iter().enumerate() {
        // Create a matcher with a single pattern.
        let mut compiler = Compiler::new(test_data.dialect);
        match compiler.add_pattern(test_data.pattern, true) {
            Ok(_) => {
                assert!(
                    test_data.error_msg.is_none(),
                    "#{}: Parsing pattern should fail: {:?}",
                    test_number,
                    test_data,
                );
                let matcher = compiler.compile().unwrap();
                let matched = matcher.open(test_data.input.chars()).try_match_next();
                assert_eq!(
                    matched.as_ref().map(|m| m.capture()),
                    test_data.expected,
                    "#{}: {:?}",
                    test_number,
                    test_data
                );
                if let Some(matched) = matched {
                    assert!(*matched.value(), "#{}: Wrong value", test_number);
                }
            }
            Err(e) => {
                // Parsing failed. Check if the error message is as expected.
                assert!(
                    test_data.error_msg.is_some(),
                    "#{}: Unexpected error: {}, {:?}",
                    test_number,
                    e,
                    test_data
                );
                assert_eq!(
                    e.to_string(),
                    test_data.error_msg.unwrap(),
                    "#{}: {:?}",
                    test_number,
                    test_data
                );
            }
        }
    }
}

#[test]
fn end_of_file_test() {
    let mut compiler = Compiler::regex();
    compiler.add_end_of_file(true);
    let matcher = compiler.compile().unwrap();

    let mut iterator = matcher.open("".chars());
    let matched = iterator.try_match_next().unwrap();
    assert!(*matched.value());
    assert_eq!(matched.capture(), "");
    assert_eq!(iterator.position(), 1);
    assert!(iterator.try_match_next().is_none());

    // Characters before the end of the input prevent the end of file match
    let mut iterator = matcher.open("x".chars());
    assert!(iterator.try_match_next().is_none());
    assert_eq!(iterator.position(), 0);
}

#[test]
fn ambiguity_test() {
    let mut compiler = Compiler::regex();
    compiler.add_pattern("a|b", false).unwrap();
    compiler.add_pattern("b|c", true).unwrap();
    let error = compiler.compile().unwrap_err();
    assert_eq!(
        error.to_string(),
        "transition collision between multiple values: false, true"
    );

    // Patterns that only share a prefix are not ambiguous
    let mut compiler = Compiler::regex();
    compiler.add_pattern("ab", 1).unwrap();
    compiler.add_pattern("abc", 2).unwrap();
    compiler.add_pattern("a[b-z]d", 3).unwrap();
    let matcher = compiler.compile().unwrap();
    let values: Vec<_> = ["ab", "abc", "abd", "acd"]
        .iter()
        .map(|input| *matcher.open(input.chars()).try_match_next().unwrap().value())
        .collect();
    assert_eq!(values, vec![1, 2, 3, 3]);
}

#[test]
fn longest_match_test() {
    let mut compiler = Compiler::regex();
    compiler.add_pattern("a", 'X').unwrap();
    compiler.add_pattern("aab", 'Y').unwrap();
    let matcher = compiler.compile().unwrap();
    let matched = matcher.open("aab".chars()).try_match_next().unwrap();
    assert_eq!(*matched.value(), 'Y');
    assert_eq!(matched.capture(), "aab");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    End,
    Integer,
    Plus,
    Minus,
    ParenthesisBegin,
    ParenthesisEnd,
}

fn arithmetic_lexer() -> lexfa::Matcher<Option<Lexeme>> {
    let mut compiler = Compiler::regex();
    compiler
        .add_end_of_file(Some(Lexeme::End))
        .add_pattern("[0-9]+", Some(Lexeme::Integer))
        .and_then(|c| c.add_pattern(r"\+", Some(Lexeme::Plus)))
        .and_then(|c| c.add_pattern("-", Some(Lexeme::Minus)))
        .and_then(|c| c.add_pattern(r"\(", Some(Lexeme::ParenthesisBegin)))
        .and_then(|c| c.add_pattern(r"\)", Some(Lexeme::ParenthesisEnd)))
        .and_then(|c| c.add_pattern("[\n\r\t ]+", None))
        .unwrap();
    compiler.compile().unwrap()
}

#[test]
fn iterate_lexemes_test() {
    use Lexeme::*;

    let matcher = arithmetic_lexer();
    for (expression, expected) in [
        ("1\t+\n1", vec![Integer, Plus, Integer, End]),
        (
            "1 + (2 - 3)",
            vec![
                Integer,
                Plus,
                ParenthesisBegin,
                Integer,
                Minus,
                Integer,
                ParenthesisEnd,
                End,
            ],
        ),
    ] {
        let mut iterator = matcher.open(expression.chars());
        let mut values = Vec::new();
        while let Some(matched) = iterator.try_match_next() {
            if let Some(lexeme) = matched.value() {
                values.push(*lexeme);
            }
        }
        assert_eq!(values, expected, "{:?}", expression);
    }
}

#[test]
fn idempotence_test() {
    // Two compilations of the same patterns accept the same language
    let first = arithmetic_lexer();
    let second = arithmetic_lexer();
    for input in ["12+(3-4)", "  7", "x", "", "1-)"] {
        let a: Vec<_> = first.open(input.chars()).collect();
        let b: Vec<_> = second.open(input.chars()).collect();
        assert_eq!(a, b, "{:?}", input);
    }
}

#[test]
fn regex_crate_agreement_test() {
    // Patterns that mean the same in both syntaxes must capture the same prefix
    let cases = [
        ("[a-c]+x?", "abcbx-"),
        ("(ab|a)(c|bcd)", "abcd"),
        ("[0-9]{2,3}", "12345"),
        ("[^ ]+", "word rest"),
        ("a(b|c)*d", "abccbd"),
    ];
    for (pattern, input) in cases {
        let mut compiler = Compiler::regex();
        compiler.add_pattern(pattern, ()).unwrap();
        let matcher = compiler.compile().unwrap();
        let matched = matcher.open(input.chars()).try_match_next().unwrap();

        // Leftmost-longest semantics of the regex crate are emulated by trying all prefixes
        let anchored = regex::Regex::new(&format!("^(?:{})$", pattern)).unwrap();
        let longest = (0..=input.len())
            .rev()
            .filter(|end| input.is_char_boundary(*end))
            .find(|end| anchored.is_match(&input[..*end]))
            .unwrap();
        assert_eq!(matched.capture(), &input[..longest], "{:?}", pattern);
    }
}
