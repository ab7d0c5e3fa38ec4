//! Output rendering of generated template sets.
//!
//! XML output follows the SCL `DataTypeTemplates` layout, which requires the
//! tiers in the order:
//!
//! ```text
//! LNodeType* → DOType* → DAType* → EnumType*
//! ```

use anyhow::Result;
use clap::ValueEnum;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use tplgen_core::{Element, TemplateSet, Tier};

/// Root element of the XML fragment.
pub const ROOT_TAG: &str = "DataTypeTemplates";

/// Tier order within `DataTypeTemplates`.
const XML_TIER_ORDER: [Tier; 4] = [
    Tier::LogicalNode,
    Tier::DataObject,
    Tier::Attribute,
    Tier::Enumeration,
];

/// Attributes written ahead of the others, in this order.
const LEADING_ATTRIBUTES: [&str; 2] = ["id", "name"];

/// Output format of a rendered template set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SCL `DataTypeTemplates` fragment.
    #[default]
    Xml,
    /// Pretty-printed JSON of the four output sets.
    Json,
}

impl OutputFormat {
    /// Render `set` in this format.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn render(self, set: &TemplateSet) -> Result<String> {
        match self {
            Self::Xml => render_xml(set),
            Self::Json => render_json(set),
        }
    }
}

/// Render `set` as an indented `DataTypeTemplates` document.
///
/// # Errors
///
/// Propagates writer failures.
pub fn render_xml(set: &TemplateSet) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if set.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(ROOT_TAG)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
        for tier in XML_TIER_ORDER {
            for element in set.tier(tier) {
                write_element(&mut writer, element)?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.tag());
    for name in LEADING_ATTRIBUTES {
        if let Some(value) = element.attribute(name) {
            start.push_attribute((name, value));
        }
    }
    for (name, value) in element.attributes() {
        if !LEADING_ATTRIBUTES.contains(&name) {
            start.push_attribute((name, value));
        }
    }

    if element.text().is_none() && element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag())))?;
    Ok(())
}

/// Render `set` as pretty-printed JSON.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn render_json(set: &TemplateSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(set)?)
}
