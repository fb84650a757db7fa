//! Tests for step chain parsing

use rstest::rstest;

use vtcli::application::{parse_steps, ApplicationError, Pipeline, Step};

fn usage_token(result: Result<Vec<Step>, ApplicationError>) -> String {
    match result {
        Err(ApplicationError::Usage { token }) => token,
        other => panic!("expected usage error, got {:?}", other),
    }
}

#[rstest]
#[case(&["--list-nodes"], vec![Step::ListNodes])]
#[case(&["--list-properties"], vec![Step::ListProperties])]
#[case(&["-l"], vec![Step::ListNodes, Step::ListProperties])]
#[case(&["-x"], vec![Step::Dump])]
#[case(&["-n", "tag"], vec![Step::SelectByName("tag".into())])]
#[case(&["--node-name", "tag"], vec![Step::SelectByName("tag".into())])]
#[case(&["-i", "2"], vec![Step::SelectByIndex("2".into())])]
#[case(&["--node-index", "2"], vec![Step::SelectByIndex("2".into())])]
#[case(&["--read", "size"], vec![Step::Read("size".into())])]
#[case(
    &["--write", "size", "10"],
    vec![Step::Write { property: "size".into(), value: "10".into() }]
)]
#[case(
    &["-np", "MODULE", "id", "juce_core"],
    vec![Step::SelectByProperty {
        node: "MODULE".into(),
        property: "id".into(),
        value: "juce_core".into(),
    }]
)]
fn given_single_flag_when_parsing_then_produces_step(
    #[case] tokens: &[&str],
    #[case] expected: Vec<Step>,
) {
    assert_eq!(parse_steps(tokens).unwrap(), expected);
}

#[rstest]
#[case(&["-n"], "-n")]
#[case(&["--node-name"], "--node-name")]
#[case(&["-i"], "-i")]
#[case(&["--read"], "--read")]
#[case(&["--write", "size"], "--write")]
#[case(&["-np", "MODULE", "id"], "-np")]
#[case(&["-n", "a", "--bogus"], "--bogus")]
#[case(&["tag"], "tag")]
fn given_bad_or_incomplete_tokens_when_parsing_then_usage_error_names_token(
    #[case] tokens: &[&str],
    #[case] offending: &str,
) {
    assert_eq!(usage_token(parse_steps(tokens)), offending);
}

#[test]
fn given_mixed_chain_when_parsing_then_keeps_order() {
    let tokens = [
        "-n", "JUCERPROJECT", "-np", "MODULE", "id", "juce_core", "--write", "showAllCode", "1",
        "--read", "showAllCode", "-l",
    ];

    let steps = parse_steps(&tokens).unwrap();

    assert_eq!(
        steps,
        vec![
            Step::SelectByName("JUCERPROJECT".into()),
            Step::SelectByProperty {
                node: "MODULE".into(),
                property: "id".into(),
                value: "juce_core".into(),
            },
            Step::Write {
                property: "showAllCode".into(),
                value: "1".into(),
            },
            Step::Read("showAllCode".into()),
            Step::ListNodes,
            Step::ListProperties,
        ]
    );
}

#[test]
fn given_repeated_node_names_when_parsing_then_one_step_each() {
    let steps = parse_steps(&["-n", "a", "--node-name", "b", "-n", "c"]).unwrap();

    assert_eq!(steps.len(), 3);
    assert!(steps.iter().all(|s| matches!(s, Step::SelectByName(_))));
}

#[test]
fn given_owned_tokens_when_building_pipeline_then_accepts_strings() {
    let tokens: Vec<String> = vec!["--write".into(), "k".into(), "v".into()];

    let pipeline = Pipeline::parse(tokens.as_slice()).unwrap();

    assert_eq!(pipeline.steps().len(), 1);
    assert!(pipeline.steps()[0].is_mutating());
}
