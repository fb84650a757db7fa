//! Turns the raw tokens after the file name into a chain of steps.

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, Step};

/// Parse step tokens strictly left to right.
///
/// A flag followed by fewer values than it needs is rejected the same way as
/// an unknown token: the error names the flag itself.
#[instrument(level = "debug", skip(tokens))]
pub fn parse_steps<S: AsRef<str>>(tokens: &[S]) -> ApplicationResult<Vec<Step>> {
    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    let mut steps = Vec::new();
    let mut rest = tokens.as_slice();

    while let [head, tail @ ..] = rest {
        let consumed = match (*head, tail) {
            ("--list-nodes", _) => {
                steps.push(Step::ListNodes);
                0
            }
            ("--list-properties", _) => {
                steps.push(Step::ListProperties);
                0
            }
            ("-l", _) => {
                steps.push(Step::ListNodes);
                steps.push(Step::ListProperties);
                0
            }
            ("-x", _) => {
                steps.push(Step::Dump);
                0
            }
            ("--node-name" | "-n", [name, ..]) => {
                steps.push(Step::SelectByName(name.to_string()));
                1
            }
            ("--node-index" | "-i", [index, ..]) => {
                steps.push(Step::SelectByIndex(index.to_string()));
                1
            }
            ("--read", [property, ..]) => {
                steps.push(Step::Read(property.to_string()));
                1
            }
            ("--write", [property, value, ..]) => {
                steps.push(Step::Write {
                    property: property.to_string(),
                    value: value.to_string(),
                });
                2
            }
            ("-np", [node, property, value, ..]) => {
                steps.push(Step::SelectByProperty {
                    node: node.to_string(),
                    property: property.to_string(),
                    value: value.to_string(),
                });
                3
            }
            (token, _) => {
                return Err(ApplicationError::Usage {
                    token: token.to_string(),
                })
            }
        };
        rest = &tail[consumed..];
    }

    debug!("parsed {} steps", steps.len());
    Ok(steps)
}
