//! Steps: the operations a command chain is made of
//!
//! Every step maps the current node to the next current node. Observing steps
//! (listings, reads, dumps) hand back their input unchanged, so the executor
//! is a plain left fold over the chain.

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Document, DomainError, NodeId, Value};
use crate::infrastructure::traits::DocumentCodec;

/// Collaborators a step may need while it runs.
pub struct StepContext<'a> {
    /// Serializer used by [`Step::Dump`]
    pub codec: &'a dyn DocumentCodec,
    /// Destination for listings, values and diagnostics
    pub out: &'a mut dyn Write,
}

/// One operation of a command chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the type name of every child
    ListNodes,
    /// Print the name of every property
    ListProperties,
    /// Move to the first child with this type name
    SelectByName(String),
    /// Move to the child at a 0-based position; non-numeric tokens select by name
    SelectByIndex(String),
    /// Move to the first child whose property equals a value
    SelectByProperty {
        node: String,
        property: String,
        value: String,
    },
    /// Print a property value
    Read(String),
    /// Create or overwrite a property
    Write { property: String, value: String },
    /// Print the current subtree as XML
    Dump,
}

impl Step {
    /// Whether running this step changes the document.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Step::Write { .. })
    }

    #[instrument(level = "debug", skip(self, document, ctx), fields(step = ?self))]
    pub fn apply(
        &self,
        document: &mut Document,
        current: NodeId,
        ctx: &mut StepContext<'_>,
    ) -> ApplicationResult<NodeId> {
        match self {
            Step::ListNodes => {
                list_nodes(document, current, ctx.out)?;
                Ok(current)
            }
            Step::ListProperties => {
                for name in document.property_names(current)? {
                    writeln!(ctx.out, "{}", name).on_output()?;
                }
                Ok(current)
            }
            Step::SelectByName(name) => match document.child_by_name(current, name) {
                Ok(child) => Ok(child),
                Err(e @ DomainError::NodeNotFound(_)) => {
                    writeln!(ctx.out, "error: not found: {}", name).on_output()?;
                    report_siblings(document, current, ctx.out)?;
                    Err(e.into())
                }
                Err(e) => Err(e.into()),
            },
            Step::SelectByIndex(token) => {
                let found = match token.trim().parse::<usize>() {
                    Ok(index) => document.child_at(current, index),
                    Err(_) => {
                        debug!("'{}' is not an index, selecting by name", token);
                        document.child_by_name(current, token)
                    }
                };
                match found {
                    Ok(child) => Ok(child),
                    Err(e @ (DomainError::IndexOutOfRange { .. } | DomainError::NodeNotFound(_))) => {
                        writeln!(ctx.out, "error: index out of range").on_output()?;
                        Err(e.into())
                    }
                    Err(e) => Err(e.into()),
                }
            }
            Step::SelectByProperty {
                node,
                property,
                value,
            } => match document.child_by_property(current, property, value) {
                Ok(child) => Ok(child),
                Err(e @ DomainError::NoMatchingChild { .. }) => {
                    writeln!(
                        ctx.out,
                        "error: node not found, when looking for name '{}' with property '{}' equal to '{}'",
                        node, property, value
                    )
                    .on_output()?;
                    report_siblings(document, current, ctx.out)?;
                    Err(e.into())
                }
                Err(e) => Err(e.into()),
            },
            Step::Read(property) => match document.property(current, property) {
                Ok(value) => {
                    writeln!(ctx.out, "{}", value).on_output()?;
                    Ok(current)
                }
                Err(e @ DomainError::PropertyNotFound(_)) => {
                    writeln!(ctx.out, "error: property not found").on_output()?;
                    Err(e.into())
                }
                Err(e) => Err(e.into()),
            },
            Step::Write { property, value } => {
                let previous =
                    document.set_property(current, property, Value::Text(value.clone()))?;
                debug!("set {}={} (was {:?})", property, value, previous);
                Ok(current)
            }
            Step::Dump => {
                let xml = ctx
                    .codec
                    .serialize(document, current)
                    .map_err(ApplicationError::Serialization)?;
                write!(ctx.out, "\n{}\n", xml).on_output()?;
                Ok(current)
            }
        }
    }
}

fn list_nodes(document: &Document, id: NodeId, out: &mut dyn Write) -> ApplicationResult<()> {
    for name in document.child_names(id)? {
        writeln!(out, "{}", name).on_output()?;
    }
    Ok(())
}

/// Follow a failed selection with the children that were available.
fn report_siblings(document: &Document, id: NodeId, out: &mut dyn Write) -> ApplicationResult<()> {
    writeln!(out, "valid nodes were:").on_output()?;
    list_nodes(document, id, out)
}
