//! quick-xml backed document codec
//!
//! Only elements and their attributes are part of the document model. Text,
//! comments, processing instructions and the doctype are skipped on load and
//! therefore not written back.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::Settings;
use crate::domain::{Document, DomainError, NodeId};
use crate::infrastructure::traits::DocumentCodec;

/// Errors raised while reading or writing XML.
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML parse error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("invalid UTF-8 in {what}")]
    Encoding { what: &'static str },

    #[error("empty document: no root element found")]
    Empty,

    #[error("multiple root elements: <{first}> and <{second}>")]
    MultipleRoots { first: String, second: String },

    #[error("unclosed element(s): <{0}>")]
    Unclosed(String),

    #[error("XML write error: {0}")]
    Write(String),

    #[error("{0}")]
    Tree(#[from] DomainError),
}

/// Reads and writes documents as XML text.
#[derive(Debug, Clone)]
pub struct XmlCodec {
    /// Spaces per nesting level, 0 writes everything on one line
    indent: usize,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the element
    declaration: bool,
}

impl Default for XmlCodec {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

impl XmlCodec {
    pub fn new(indent: usize, declaration: bool) -> Self {
        Self {
            indent,
            declaration,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.indent, settings.xml_declaration)
    }
}

/// Pending work while writing a subtree.
enum Visit {
    Open(NodeId),
    Close(NodeId),
}

/// Write `root` and everything below it, without recursion.
fn write_subtree(
    writer: &mut Writer<Vec<u8>>,
    document: &Document,
    root: NodeId,
) -> Result<(), XmlError> {
    let mut pending = vec![Visit::Open(root)];
    while let Some(visit) = pending.pop() {
        match visit {
            Visit::Open(id) => {
                let node = document.node(id)?;
                let mut start = BytesStart::new(node.type_name());
                for (name, value) in node.properties() {
                    let value = value.to_string();
                    start.push_attribute((name, value.as_str()));
                }

                if node.children().is_empty() {
                    write_event(writer, Event::Empty(start))?;
                    continue;
                }

                write_event(writer, Event::Start(start))?;
                pending.push(Visit::Close(id));
                pending.extend(node.children().iter().rev().map(|&child| Visit::Open(child)));
            }
            Visit::Close(id) => {
                let name = document.node(id)?.type_name();
                write_event(writer, Event::End(BytesEnd::new(name)))?;
            }
        }
    }
    Ok(())
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), XmlError> {
    writer
        .write_event(event)
        .map_err(|e| XmlError::Write(e.to_string()))
}

fn utf8<'a>(bytes: &'a [u8], what: &'static str) -> Result<&'a str, XmlError> {
    std::str::from_utf8(bytes).map_err(|_| XmlError::Encoding { what })
}

/// Copy the attributes of an element event onto a document node.
fn read_attributes(
    event: &BytesStart<'_>,
    document: &mut Document,
    id: NodeId,
    position: usize,
) -> Result<(), XmlError> {
    for attr in event.attributes() {
        let attr = attr.map_err(|e| XmlError::Syntax {
            position,
            message: e.to_string(),
        })?;
        let key = utf8(attr.key.as_ref(), "attribute name")?.to_string();
        let value = attr.unescape_value().map_err(|e| XmlError::Syntax {
            position,
            message: e.to_string(),
        })?;
        document.set_property(id, &key, value.into_owned())?;
    }
    Ok(())
}

impl DocumentCodec for XmlCodec {
    fn parse(&self, text: &str) -> Result<Document, XmlError> {
        let mut reader = Reader::from_str(text);
        reader.trim_text(true);

        let mut document: Option<Document> = None;
        // open elements, innermost last
        let mut stack: Vec<NodeId> = Vec::new();

        loop {
            let position = reader.buffer_position();
            let event = reader.read_event().map_err(|e| XmlError::Syntax {
                position: reader.buffer_position(),
                message: e.to_string(),
            })?;

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let name = utf8(e.name().as_ref(), "element name")?.to_string();
                    let id = match document.as_mut() {
                        None => {
                            let doc = Document::new(name);
                            let root = doc.root();
                            document = Some(doc);
                            root
                        }
                        Some(doc) => match stack.last() {
                            Some(&parent) => doc.append_child(parent, &name)?,
                            None => {
                                let first = doc.node(doc.root())?.type_name().to_string();
                                return Err(XmlError::MultipleRoots {
                                    first,
                                    second: name,
                                });
                            }
                        },
                    };
                    if let Some(doc) = document.as_mut() {
                        read_attributes(e, doc, id, position)?;
                    }
                    if matches!(event, Event::Start(_)) {
                        stack.push(id);
                    }
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Eof => break,
                other => trace!("skipping event: {:?}", other),
            }
        }

        if !stack.is_empty() {
            let names = match &document {
                Some(doc) => stack
                    .iter()
                    .map(|&id| doc.node(id).map(|n| n.type_name().to_string()))
                    .collect::<Result<Vec<_>, _>>()?,
                None => Vec::new(),
            };
            return Err(XmlError::Unclosed(names.join(">, <")));
        }

        let document = document.ok_or(XmlError::Empty)?;
        debug!(
            "parsed document: {} nodes, depth {}",
            document.len(),
            document.depth()
        );
        Ok(document)
    }

    fn serialize(&self, document: &Document, node: NodeId) -> Result<String, XmlError> {
        let mut writer = if self.indent == 0 {
            Writer::new(Vec::new())
        } else {
            Writer::new_with_indent(Vec::new(), b' ', self.indent)
        };

        if self.declaration {
            write_event(
                &mut writer,
                Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
            )?;
        }
        write_subtree(&mut writer, document, node)?;

        String::from_utf8(writer.into_inner()).map_err(|_| XmlError::Encoding {
            what: "serialized document",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_compact_codec_when_serializing_then_writes_single_line() {
        let codec = XmlCodec::new(0, false);
        let doc = codec.parse(r#"<root><a x="1"/></root>"#).unwrap();

        let text = codec.serialize(&doc, doc.root()).unwrap();

        assert_eq!(text, r#"<root><a x="1"/></root>"#);
    }

    #[test]
    fn given_declaration_enabled_when_serializing_then_starts_with_prolog() {
        let codec = XmlCodec::default();
        let doc = codec.parse("<root/>").unwrap();

        let text = codec.serialize(&doc, doc.root()).unwrap();

        assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(text.ends_with("<root/>"));
    }
}
