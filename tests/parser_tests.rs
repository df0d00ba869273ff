use sqlstash::classifier::statement_kind::StatementKind;
use sqlstash::config::Config;
use sqlstash::error::ErrorKind;
use sqlstash::loader;
use sqlstash::parser::entry::{parse_statements, ParsedStatement};

mod support;

#[test]
fn parse_users_fixture_names_and_kinds() {
    let stmts = loader::load_queries(&[support::fixture_path("users.sql")], &Config::default())
        .expect("fixture should parse");

    let summary: Vec<(&str, StatementKind)> =
        stmts.iter().map(|s| (s.name(), s.kind())).collect();
    assert_eq!(
        summary,
        vec![
            ("GET_ALL_USERS", StatementKind::Select),
            ("GET_USER_BY_NAME", StatementKind::Select),
            ("INSERT_USER", StatementKind::Mutate),
            ("INSERT_USER_RETURNING", StatementKind::MutateReturning),
            ("REFRESH_STATS", StatementKind::CallProcedure),
            ("SEARCH_USERS", StatementKind::SelectBuilt),
        ]
    );
}

#[test]
fn parse_single_entry_end_to_end() {
    let text = "-- name: get_by_name\n-- fetch all matching rows\nSELECT * FROM t WHERE name = %(n)s";
    let stmts = parse_statements(text, &Config::default()).expect("should parse");

    assert_eq!(stmts.len(), 1);
    let stmt = &stmts[0];
    assert_eq!(stmt.name(), "GET_BY_NAME");
    assert_eq!(stmt.kind(), StatementKind::Select);
    assert_eq!(stmt.description(), Some("fetch all matching rows"));
    assert_eq!(stmt.body(), "SELECT * FROM t WHERE name = %(n)s");
}

#[test]
fn two_statements_keep_their_own_bodies() {
    let text = "-- name: a\nSELECT 1\nFROM one\n\n-- name: b\nSELECT 2\nFROM two";
    let stmts = parse_statements(text, &Config::default()).expect("should parse");

    assert_eq!(stmts[0].body(), "SELECT 1\nFROM one");
    assert_eq!(stmts[1].body(), "SELECT 2\nFROM two");
}

#[test]
fn built_statement_fragments_cover_every_body_line() {
    let stmts = parse_statements(&support::read_fixture_sql("users.sql"), &Config::default())
        .expect("fixture should parse");
    let search = stmts
        .iter()
        .find(|s| s.name() == "SEARCH_USERS")
        .expect("search statement");
    let index = search.fragments().expect("built statement has fragments");

    // 7 body lines, one of which carries two parameters.
    assert_eq!(index.len(), 8);
    assert_eq!(index.unconditional().len(), 4);
    let params: Vec<&str> = index.param_names().collect();
    assert_eq!(params, vec!["email", "name", "since", "until"]);
    assert!(index
        .fragments()
        .windows(2)
        .all(|pair| pair[0].position < pair[1].position));
}

#[test]
fn reparsing_loaded_text_yields_the_same_names() {
    let text = loader::load_files(&[
        support::fixture_path("users.sql"),
        support::fixture_path("reports.sql"),
    ])
    .expect("fixtures should load");

    let first = parse_statements(&text, &Config::default()).expect("first parse");
    let second = parse_statements(&text, &Config::default()).expect("second parse");
    let names = |stmts: &[ParsedStatement]| -> Vec<String> {
        stmts.iter().map(|s| s.name().to_string()).collect()
    };
    assert_eq!(names(&first), names(&second));
    assert_eq!(first.len(), 8);
}

#[test]
fn rendered_statements_reparse_identically() {
    let stmts = parse_statements(&support::read_fixture_sql("users.sql"), &Config::default())
        .expect("fixture should parse");
    let rendered = stmts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");

    let reparsed = parse_statements(&rendered, &Config::default()).expect("rendered text parses");
    assert_eq!(reparsed, stmts);
}

#[test]
fn malformed_header_aborts_the_whole_load() {
    let text = "-- name: good\nSELECT 1\n\n-- name: fo o\nSELECT 2";
    let err = parse_statements(text, &Config::default()).expect_err("bad header should fail");
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("-- name: fo o"));
}

#[test]
fn malformed_parameter_in_built_statement_aborts_the_load() {
    let text = "-- name: ok\nSELECT 1\n\n-- name: broken$\nSELECT *\nWHERE a = %()s";
    let err = parse_statements(text, &Config::default()).expect_err("empty name should fail");
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("WHERE a = %()s"));
}

#[test]
fn case_folding_is_configurable() {
    let config = Config::default().with_uppercase_names(false);
    let stmts = parse_statements("-- name: getUser<!>\nINSERT INTO t DEFAULT VALUES", &config)
        .expect("should parse");
    assert_eq!(stmts[0].name(), "getUser");
    assert_eq!(stmts[0].kind(), StatementKind::MutateReturning);
}
