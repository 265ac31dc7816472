//! XML request bodies for mutating CMCI operations.
//!
//! Every create, action, and update call sends a small XML document under a
//! fixed `<request>` envelope. Bodies are assembled as [`Element`] trees and
//! serialized on send; attribute names and casing are part of the wire
//! contract with the CMCI server and must not be altered.

use quick_xml::escape::escape;

/// Install a CSD definition into the running region.
pub const ACTION_CSDINSTALL: &str = "CSDINSTALL";
/// Load a new copy of a program that is already installed.
pub const ACTION_NEWCOPY: &str = "NEWCOPY";
/// Add a CSD group to a CSD list.
pub const ACTION_CSDADD: &str = "CSDADD";
/// Remove a CSD group from a CSD list.
pub const ACTION_CSDREMOVE: &str = "CSDREMOVE";

/// An XML element with attributes and child elements.
///
/// Request bodies never carry mixed text content, so elements here are
/// attributes-and-children only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Serializes the element tree to an XML string.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            for child in &self.children {
                child.write(out);
            }
            out.push_str("</");
            out.push_str(&self.name);
            out.push('>');
        }
    }
}

/// Builds the body of a resource-definition create call.
///
/// The envelope is fixed: a `parameter` element naming the CSD store,
/// followed by an `attributes` element carrying the flat field map in the
/// order given.
pub fn create_request(attributes: &[(&str, &str)]) -> Element {
    let mut attribute_element = Element::new("attributes");
    for (name, value) in attributes {
        attribute_element = attribute_element.attribute(*name, *value);
    }
    Element::new("request").child(
        Element::new("create")
            .child(Element::new("parameter").attribute("name", "CSD"))
            .child(attribute_element),
    )
}

/// Builds the body of an action call such as CSDINSTALL or NEWCOPY.
pub fn action_request(action: &str) -> Element {
    Element::new("request").child(Element::new("action").attribute("name", action))
}

/// Builds the body of a CSD-list membership action (CSDADD or CSDREMOVE),
/// naming the target list in a nested parameter.
pub fn list_action_request(action: &str, csd_list: &str) -> Element {
    Element::new("request").child(
        Element::new("action").attribute("name", action).child(
            Element::new("parameter")
                .attribute("name", "TO_CSDLIST")
                .attribute("value", csd_list),
        ),
    )
}

/// Builds the body of an update call that rewrites installed-resource
/// attributes, e.g. flipping a URIMap's enablestatus.
pub fn update_request(attributes: &[(&str, &str)]) -> Element {
    let mut attribute_element = Element::new("attributes");
    for (name, value) in attributes {
        attribute_element = attribute_element.attribute(*name, *value);
    }
    Element::new("request").child(Element::new("update").child(attribute_element))
}
