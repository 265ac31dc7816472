//! XML to object conversion for CMCI response bodies.
//!
//! CMCI responses are XML whose shape varies per resource type, so parsed
//! documents are represented as a tagged union ([`XmlNode`]) instead of fixed
//! structs. Conversion rules:
//!
//! - an element's attributes become keys of an object, each holding a scalar
//! - child elements become keys holding the child's converted node
//! - repeated sibling elements with the same tag collapse into an ordered
//!   list, preserving document order
//! - a singleton element stays a single object, never a one-element list
//! - text content of an element that also carries attributes or children is
//!   stored under the [`TEXT_KEY`] key
//! - an element with no attributes and no children becomes a scalar holding
//!   its text
//!
//! The root element appears as the single key of the returned top-level
//! object, mirroring the document structure.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Key under which mixed text content is stored when an element also has
/// attributes or children.
pub const TEXT_KEY: &str = "_value";

/// A parsed XML node.
///
/// Objects keep their entries in document order (attributes first, then child
/// elements), so callers can rely on the order the server emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Text content of a leaf element or attribute value.
    Scalar(String),
    /// An element with attributes and/or children, as ordered name/node pairs.
    Object(Vec<(String, XmlNode)>),
    /// Repeated sibling elements sharing one tag, in document order.
    List(Vec<XmlNode>),
}

impl XmlNode {
    /// Looks up a key of an object node.
    pub fn get(&self, key: &str) -> Option<&XmlNode> {
        match self {
            XmlNode::Object(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    /// Returns the text of a scalar node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmlNode::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Looks up a key and returns its scalar text.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(XmlNode::as_str)
    }

    /// Views this node as a sequence of records.
    ///
    /// A list yields its elements; any other node yields itself as a
    /// single-record sequence. This is how callers consume a `records`
    /// section without caring whether the server returned one record or
    /// many.
    pub fn as_items(&self) -> &[XmlNode] {
        match self {
            XmlNode::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

impl Serialize for XmlNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            XmlNode::Scalar(text) => serializer.serialize_str(text),
            XmlNode::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (name, node) in entries {
                    map.serialize_entry(name, node)?;
                }
                map.end()
            }
            XmlNode::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Error produced when a response body is not well-formed XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlParseError {
    message: String,
}

impl XmlParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for XmlParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Malformed XML: {}", self.message)
    }
}

impl std::error::Error for XmlParseError {}

/// Parses an XML document into an [`XmlNode`] object keyed by the root
/// element's tag.
pub fn parse(xml: &str) -> Result<XmlNode, XmlParseError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = element_name(&start);
                let attributes = element_attributes(&start)?;
                let (children, text) = parse_children(&mut reader)?;
                let node = finish_element(attributes, children, text);
                return Ok(XmlNode::Object(vec![(name, node)]));
            }
            Ok(Event::Empty(start)) => {
                let name = element_name(&start);
                let attributes = element_attributes(&start)?;
                let node = finish_element(attributes, Vec::new(), String::new());
                return Ok(XmlNode::Object(vec![(name, node)]));
            }
            Ok(Event::Eof) => return Err(XmlParseError::new("document has no root element")),
            Ok(_) => {}
            Err(e) => return Err(XmlParseError::new(e.to_string())),
        }
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn element_attributes(start: &BytesStart<'_>) -> Result<Vec<(String, XmlNode)>, XmlParseError> {
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| XmlParseError::new(e.to_string()))?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| XmlParseError::new(e.to_string()))?
            .into_owned();
        attributes.push((name, XmlNode::Scalar(value)));
    }
    Ok(attributes)
}

/// Reads the contents of an open element up to its end tag.
fn parse_children(
    reader: &mut Reader<&[u8]>,
) -> Result<(Vec<(String, XmlNode)>, String), XmlParseError> {
    let mut children: Vec<(String, XmlNode)> = Vec::new();
    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = element_name(&start);
                let attributes = element_attributes(&start)?;
                let (nested, nested_text) = parse_children(reader)?;
                merge_child(&mut children, name, finish_element(attributes, nested, nested_text));
            }
            Ok(Event::Empty(start)) => {
                let name = element_name(&start);
                let attributes = element_attributes(&start)?;
                merge_child(
                    &mut children,
                    name,
                    finish_element(attributes, Vec::new(), String::new()),
                );
            }
            Ok(Event::Text(t)) => {
                let unescaped = t.unescape().map_err(|e| XmlParseError::new(e.to_string()))?;
                text.push_str(unescaped.trim());
            }
            Ok(Event::CData(c)) => {
                text.push_str(&String::from_utf8_lossy(&c.into_inner()));
            }
            Ok(Event::End(_)) => return Ok((children, text)),
            Ok(Event::Eof) => {
                return Err(XmlParseError::new("unexpected end of document inside element"));
            }
            Ok(_) => {}
            Err(e) => return Err(XmlParseError::new(e.to_string())),
        }
    }
}

/// Appends a child entry, collapsing repeated sibling tags into a list.
fn merge_child(children: &mut Vec<(String, XmlNode)>, name: String, node: XmlNode) {
    if let Some((_, existing)) = children.iter_mut().find(|(n, _)| *n == name) {
        match existing {
            XmlNode::List(items) => items.push(node),
            _ => {
                let first = std::mem::replace(existing, XmlNode::List(Vec::new()));
                if let XmlNode::List(items) = existing {
                    items.push(first);
                    items.push(node);
                }
            }
        }
    } else {
        children.push((name, node));
    }
}

fn finish_element(
    mut entries: Vec<(String, XmlNode)>,
    children: Vec<(String, XmlNode)>,
    text: String,
) -> XmlNode {
    entries.extend(children);
    if entries.is_empty() {
        return XmlNode::Scalar(text);
    }
    if !text.is_empty() {
        entries.push((TEXT_KEY.to_string(), XmlNode::Scalar(text)));
    }
    XmlNode::Object(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_element_becomes_scalar() {
        let node = parse("<status>ENABLED</status>").unwrap();
        assert_eq!(node.get("status").unwrap().as_str(), Some("ENABLED"));
    }

    #[test]
    fn attributes_become_object_keys() {
        let node = parse(r#"<program name="PGM1" status="ENABLED"/>"#).unwrap();
        let program = node.get("program").unwrap();
        assert_eq!(program.attribute("name"), Some("PGM1"));
        assert_eq!(program.attribute("status"), Some("ENABLED"));
    }

    #[test]
    fn repeated_siblings_become_ordered_list() {
        let node = parse(
            r#"<records>
                 <program name="A"/>
                 <program name="B"/>
                 <program name="C"/>
               </records>"#,
        )
        .unwrap();
        let programs = node.get("records").unwrap().get("program").unwrap();
        let items = programs.as_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].attribute("name"), Some("A"));
        assert_eq!(items[1].attribute("name"), Some("B"));
        assert_eq!(items[2].attribute("name"), Some("C"));
    }

    #[test]
    fn singleton_element_is_not_wrapped_in_a_list() {
        let node = parse(r#"<records><program name="A"/></records>"#).unwrap();
        let program = node.get("records").unwrap().get("program").unwrap();
        assert!(matches!(*program, XmlNode::Object(_)));
        assert_eq!(program.as_items().len(), 1);
    }

    #[test]
    fn mixed_text_is_stored_under_text_key() {
        let node = parse(r#"<message code="42">resource not found</message>"#).unwrap();
        let message = node.get("message").unwrap();
        assert_eq!(message.attribute("code"), Some("42"));
        assert_eq!(message.attribute(TEXT_KEY), Some("resource not found"));
    }

    #[test]
    fn entities_are_unescaped() {
        let node = parse(r#"<expr>A &amp; B &lt; C</expr>"#).unwrap();
        assert_eq!(node.get("expr").unwrap().as_str(), Some("A & B < C"));
    }

    #[test]
    fn cdata_is_treated_as_text() {
        let node = parse("<script><![CDATA[a < b]]></script>").unwrap();
        assert_eq!(node.get("script").unwrap().as_str(), Some("a < b"));
    }

    #[test]
    fn declaration_and_comments_are_skipped() {
        let node = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
               <!-- server banner -->
               <response ok="yes"/>"#,
        )
        .unwrap();
        assert_eq!(node.get("response").unwrap().attribute("ok"), Some("yes"));
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(parse("").is_err());
        assert!(parse("<!-- nothing here -->").is_err());
    }

    #[test]
    fn truncated_document_is_an_error() {
        assert!(parse("<response><records>").is_err());
    }

    #[test]
    fn entry_order_is_document_order() {
        let node = parse(r#"<r b="2" a="1"><z/><y/></r>"#).unwrap();
        if let Some(XmlNode::Object(entries)) = node.get("r") {
            let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
            assert_eq!(names, ["b", "a", "z", "y"]);
        } else {
            panic!("expected object node");
        }
    }

    #[test]
    fn serializes_to_json_shape() {
        let node = parse(r#"<records><p name="A"/><p name="B"/></records>"#).unwrap();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["records"]["p"][0]["name"], "A");
        assert_eq!(json["records"]["p"][1]["name"], "B");
    }
}
