use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::{EntryKind, ResourceFile};

/// Tag every resource document must use as its root element.
pub const ROOT_TAG: &str = "resources";

pub fn load_resource_file(path: &Path) -> Result<ResourceFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource file: {}", path.display()))?;

    parse_resources(&content, &path.to_string_lossy())
        .with_context(|| format!("Failed to parse resource file: {}", path.display()))
}

/// Parse a `<resources>` document into its declared entries.
///
/// Only direct children of the root are inspected. A child counts as an entry
/// when its tag is a recognized [`EntryKind`] and it carries a non-empty
/// `name` attribute; anything else is skipped without error.
pub fn parse_resources(content: &str, file_path: &str) -> Result<ResourceFile> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    let mut resources = ResourceFile::new(file_path);

    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        let event = reader.read_event().map_err(|err| {
            anyhow!("Malformed XML at byte {}: {}", reader.error_position(), err)
        })?;

        match event {
            Event::Start(element) => {
                check_attributes(&element)?;
                if depth == 0 {
                    check_root(&element, root_seen)?;
                    root_seen = true;
                } else if depth == 1 {
                    declare_entry(&element, &mut resources)?;
                }
                depth += 1;
            }
            Event::Empty(element) => {
                check_attributes(&element)?;
                if depth == 0 {
                    check_root(&element, root_seen)?;
                    root_seen = true;
                } else if depth == 1 {
                    declare_entry(&element, &mut resources)?;
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) => {
                text.unescape()
                    .map_err(|err| anyhow!("Invalid character data: {}", err))?;
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    bail!("Unexpected text outside of <{}>", ROOT_TAG);
                }
            }
            Event::CData(_) if depth == 0 => {
                bail!("Unexpected CDATA section outside of <{}>", ROOT_TAG);
            }
            Event::Decl(_) | Event::DocType(_) if root_seen => {
                bail!("XML declaration or DOCTYPE must precede the root element");
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        bail!("Document has no root element");
    }
    if depth > 0 {
        bail!("Unexpected end of document: {} unclosed element(s)", depth);
    }

    Ok(resources)
}

fn check_root(element: &BytesStart, root_seen: bool) -> Result<()> {
    if root_seen {
        bail!("Document has more than one root element");
    }

    let tag = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    if tag != ROOT_TAG {
        bail!("Root element is <{}>, expected <{}>", tag, ROOT_TAG);
    }
    Ok(())
}

/// Every attribute must parse and unescape, including on skipped elements.
fn check_attributes(element: &BytesStart) -> Result<()> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|err| anyhow!("Invalid attribute: {}", err))?;
        attribute
            .unescape_value()
            .map_err(|err| anyhow!("Invalid attribute value: {}", err))?;
    }
    Ok(())
}

fn declare_entry(element: &BytesStart, resources: &mut ResourceFile) -> Result<()> {
    let Some(kind) = entry_kind(element) else {
        return Ok(());
    };
    let Some(name) = entry_name(element)? else {
        return Ok(());
    };

    resources.declare(name, kind);
    Ok(())
}

/// First filter: the tag must be a recognized entry kind.
fn entry_kind(element: &BytesStart) -> Option<EntryKind> {
    std::str::from_utf8(element.name().as_ref())
        .ok()
        .and_then(EntryKind::from_tag)
}

/// Second filter: the element must carry a non-empty `name` attribute.
fn entry_name(element: &BytesStart) -> Result<Option<String>> {
    let Some(attribute) = element.try_get_attribute("name")? else {
        return Ok(None);
    };

    let name = attribute.unescape_value()?;
    if name.is_empty() {
        return Ok(None);
    }
    Ok(Some(name.into_owned()))
}
