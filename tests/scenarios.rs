//! End-to-end scenarios driven through definition documents.

use pcpa::core::Symbol;
use pcpa::loader::{self, IssueKind, LoadError};
use pcpa::system::{ParseError, ProtocolError, SearchLimits};
use pcpa::{System, Verdict};

fn load(json: &str) -> System {
    loader::from_json_str(json).unwrap()
}

fn stack_names(trace: &pcpa::Trace, step: usize, automaton: usize) -> Vec<String> {
    trace.steps()[step].components()[automaton]
        .stack()
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}

const SINGLE_QUERY: &str = r#"{
    "input_symbols": [],
    "pushdown_symbols": ["Z"],
    "query_symbols": [{ "symbol": "Q2", "automaton": 2 }],
    "automata": [
        {
            "states": ["q0"],
            "initial_state": "q0",
            "initial_stack_symbol": "Q2",
            "accepting_mode": "EmptyStack",
            "transitions": [{ "old_state": "q0", "topmost_symbol": "Z", "new_state": "q0" }]
        },
        {
            "states": [],
            "final_states": ["p0"],
            "initial_state": "p0",
            "initial_stack_symbol": "Z",
            "accepting_mode": "FinalState"
        }
    ]
}"#;

#[test]
fn single_query_transfers_stack_of_non_returning_target() {
    let mut system = load(SINGLE_QUERY);

    let trace = system.parse("").unwrap();

    assert_eq!(trace.verdict(), Verdict::Accepted);
    assert_eq!(trace.steps().len(), 3);
    assert_eq!(stack_names(&trace, 0, 0), vec!["Q2"]);
    assert_eq!(stack_names(&trace, 1, 0), vec!["Z"]);
    assert_eq!(stack_names(&trace, 1, 1), vec!["Z"]);
    assert!(stack_names(&trace, 2, 0).is_empty());
    assert_eq!(stack_names(&trace, 2, 1), vec!["Z"]);
}

#[test]
fn returning_target_resets_after_sending() {
    let mut system = load(&SINGLE_QUERY.replacen('{', "{ \"returning\": true,", 1));

    let trace = system.parse("").unwrap();

    assert!(trace.is_accepted());
    assert!(system.automata().iter().all(|a| a.is_returning()));
    assert_eq!(stack_names(&trace, 1, 1), vec!["Z"]);
}

#[test]
fn trace_listing_marks_communication() {
    let mut system = load(SINGLE_QUERY);

    let listing = system.parse("").unwrap().to_string();

    assert!(listing.starts_with("Input accepted after 2 step(s)"));
    assert!(listing.contains("1. (q0, ε, Z)   after requested communication"));
    assert!(listing.contains("1. (p0, ε, Z)  after communication"));
    assert!(listing.contains("2. (q0, ε, ε)   (q0, ε) ∈ δ(q0, ε, Z)"));
    assert!(listing.contains("2. (p0, ε, Z)  (p0, Z) ∈ δ(p0, ε, Z)"));
}

#[test]
fn empty_stack_automaton_needs_one_step() {
    let mut system = load(
        r#"{
            "input_symbols": [],
            "pushdown_symbols": ["Z"],
            "automata": [{
                "states": ["q0"],
                "initial_state": "q0",
                "initial_stack_symbol": "Z",
                "accepting_mode": "EmptyStack",
                "transitions": [{ "old_state": "q0", "topmost_symbol": "Z", "new_state": "q0" }]
            }]
        }"#,
    );

    let trace = system.parse("").unwrap();

    assert!(trace.is_accepted());
    assert_eq!(trace.steps().len(), 2);
    assert!(trace.result().components()[0].stack().is_empty());
    assert_eq!(trace.stats().expanded, 1);
}

#[test]
fn mutual_queries_raise_circular_query() {
    let mut system = load(
        r#"{
            "input_symbols": [],
            "pushdown_symbols": ["Z"],
            "query_symbols": [
                { "symbol": "Q1", "automaton": 1 },
                { "symbol": "Q2", "automaton": 2 }
            ],
            "automata": [
                { "states": ["q0"], "initial_state": "q0", "initial_stack_symbol": "Q2",
                  "accepting_mode": "EmptyStack" },
                { "states": ["p0"], "initial_state": "p0", "initial_stack_symbol": "Q1",
                  "accepting_mode": "EmptyStack" }
            ]
        }"#,
    );

    let result = system.parse("");

    assert_eq!(
        result.unwrap_err(),
        ParseError::Protocol(ProtocolError::CircularQuery {
            requesters: vec![0, 1]
        })
    );
}

#[test]
fn stalled_round_keeps_other_branches_searching() {
    // After one move the second automaton either queries the third or
    // settles. The first and third always query the second.
    let mut system = load(
        r#"{
            "input_symbols": [],
            "pushdown_symbols": ["Z"],
            "query_symbols": [
                { "symbol": "Q2", "automaton": 2 },
                { "symbol": "Q3", "automaton": 3 }
            ],
            "automata": [
                { "states": ["a0", "a1"], "final_states": ["af"], "initial_state": "a0",
                  "initial_stack_symbol": "Z", "accepting_mode": "FinalState",
                  "transitions": [
                      { "old_state": "a0", "topmost_symbol": "Z", "new_state": "a1", "replacement": ["Q2"] },
                      { "old_state": "a1", "topmost_symbol": "Z", "new_state": "af", "replacement": ["Z"] }
                  ] },
                { "states": ["b0", "b1"], "final_states": ["bf"], "initial_state": "b0",
                  "initial_stack_symbol": "Z", "accepting_mode": "FinalState",
                  "transitions": [
                      { "old_state": "b0", "topmost_symbol": "Z", "new_state": "b1", "replacement": ["Q3"] },
                      { "old_state": "b0", "topmost_symbol": "Z", "new_state": "bf", "replacement": ["Z"] }
                  ] },
                { "states": ["c0", "c1"], "final_states": ["cf"], "initial_state": "c0",
                  "initial_stack_symbol": "Z", "accepting_mode": "FinalState",
                  "transitions": [
                      { "old_state": "c0", "topmost_symbol": "Z", "new_state": "c1", "replacement": ["Q2"] },
                      { "old_state": "c1", "topmost_symbol": "Z", "new_state": "cf", "replacement": ["Z"] }
                  ] }
            ]
        }"#,
    );

    let trace = system.parse("").unwrap();

    assert!(trace.is_accepted());
    assert_eq!(trace.steps().len(), 4);
    assert_eq!(trace.steps()[1].components()[1].state().name(), "bf");
    assert_eq!(stack_names(&trace, 2, 0), vec!["Z"]);
    assert_eq!(stack_names(&trace, 2, 2), vec!["Z"]);
    assert_eq!(trace.stats().expanded, 5);
}

#[test]
fn query_chain_resolves_one_hop_per_round() {
    let pop = r#"[{ "old_state": "s", "topmost_symbol": "Z", "new_state": "s" }]"#;
    let automaton = |initial: &str| {
        format!(
            r#"{{ "states": ["s"], "initial_state": "s", "initial_stack_symbol": "{initial}",
                 "accepting_mode": "EmptyStack", "transitions": {pop} }}"#
        )
    };
    let mut system = load(&format!(
        r#"{{
            "input_symbols": [],
            "pushdown_symbols": ["Z"],
            "query_symbols": [
                {{ "symbol": "Q2", "automaton": 2 }},
                {{ "symbol": "Q3", "automaton": 3 }}
            ],
            "automata": [{}, {}, {}]
        }}"#,
        automaton("Q2"),
        automaton("Q3"),
        automaton("Z"),
    ));

    let trace = system.parse("").unwrap();

    assert!(trace.is_accepted());
    assert_eq!(trace.steps().len(), 4);
    assert_eq!(stack_names(&trace, 1, 0), vec!["Q2"]);
    assert_eq!(stack_names(&trace, 1, 1), vec!["Z"]);
    assert_eq!(stack_names(&trace, 2, 0), vec!["Z"]);
}

#[test]
fn rejection_reports_least_unread_input() {
    let mut system = load(
        r#"{
            "input_symbols": ["a", "b"],
            "pushdown_symbols": ["Z"],
            "automata": [{
                "states": ["q0", "q1"],
                "final_states": ["qf"],
                "initial_state": "q0",
                "initial_stack_symbol": "Z",
                "accepting_mode": "FinalState",
                "transitions": [
                    { "old_state": "q0", "input_symbol": "a", "topmost_symbol": "Z",
                      "new_state": "q0", "replacement": ["Z"] },
                    { "old_state": "q0", "input_symbol": "a", "topmost_symbol": "Z",
                      "new_state": "q1", "replacement": ["Z"] }
                ]
            }]
        }"#,
    );

    let trace = system.parse("aab").unwrap();

    assert_eq!(trace.verdict(), Verdict::Rejected);
    assert_eq!(trace.result().unread_input(), 1);
    assert_eq!(trace.steps().len(), 3);
    assert_eq!(trace.result().components()[0].state().name(), "q0");
    assert_eq!(trace.stats().failed_branches, 3);
    assert!(trace.to_string().starts_with("Input rejected after 2 step(s)"));
}

#[test]
fn unknown_input_is_a_lexical_error() {
    let mut system = load(SINGLE_QUERY);

    match system.parse("x") {
        Err(ParseError::Lex(error)) => {
            assert_eq!(error.position, 1);
            assert_eq!(error.found, 'x');
        }
        other => panic!("Expected lexical error, got {other:?}"),
    }
}

#[test]
fn epsilon_loop_is_bounded_only_by_limits() {
    let mut system = load(
        r#"{
            "input_symbols": [],
            "pushdown_symbols": ["Z"],
            "automata": [{
                "states": ["q0"],
                "initial_state": "q0",
                "initial_stack_symbol": "Z",
                "accepting_mode": "FinalState",
                "transitions": [{ "old_state": "q0", "topmost_symbol": "Z",
                                  "new_state": "q0", "replacement": ["Z"] }]
            }],
            "limits": { "max_expansions": 50 }
        }"#,
    );

    assert!(matches!(
        system.parse(""),
        Err(ParseError::LimitExceeded { expanded: 50, .. })
    ));

    system.set_limits(SearchLimits::unbounded().with_max_expansions(5));
    assert!(matches!(
        system.parse(""),
        Err(ParseError::LimitExceeded { expanded: 5, .. })
    ));
}

#[test]
fn validation_reports_all_issues_at_once() {
    let result = loader::from_json_str(
        r#"{
            "input_symbols": ["a"],
            "pushdown_symbols": ["Z"],
            "query_symbols": [{ "symbol": "Q9", "automaton": 9 }],
            "automata": [{
                "states": ["q0"],
                "initial_state": "q7",
                "initial_stack_symbol": "Z",
                "accepting_mode": "FinalState",
                "transitions": [{ "old_state": "q0", "input_symbol": "b",
                                  "topmost_symbol": "Z", "new_state": "q0" }]
            }]
        }"#,
    );

    let Err(LoadError::Validation { issues }) = result else {
        panic!("Expected validation failure");
    };
    let kinds: Vec<&IssueKind> = issues.iter().map(|i| &i.kind).collect();

    assert_eq!(issues.len(), 3);
    assert!(kinds.contains(&&IssueKind::AutomatonOutOfRange { index: 9, count: 1 }));
    assert!(kinds.contains(&&IssueKind::UndefinedState("q7".to_string())));
    assert!(kinds.contains(&&IssueKind::UndefinedSymbol("b".to_string())));
}

#[test]
fn tokenized_input_reaches_every_component() {
    let mut system = load(
        r#"{
            "input_symbols": ["a", "ab"],
            "pushdown_symbols": ["Z"],
            "automata": [{
                "states": ["q0"],
                "final_states": ["qf"],
                "initial_state": "q0",
                "initial_stack_symbol": "Z",
                "accepting_mode": "FinalState",
                "transitions": [
                    { "old_state": "q0", "input_symbol": "ab", "topmost_symbol": "Z",
                      "new_state": "q0", "replacement": ["Z"] },
                    { "old_state": "q0", "input_symbol": "a", "topmost_symbol": "Z",
                      "new_state": "qf", "replacement": ["Z"] }
                ]
            }]
        }"#,
    );

    let trace = system.parse("aba").unwrap();

    assert!(trace.is_accepted());
    assert_eq!(
        trace.steps()[0].components()[0].input(),
        &[Symbol::new("ab"), Symbol::new("a")]
    );
}
