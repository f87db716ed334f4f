//! Per-icon transformation.
//!
//! Rewrites the root `<svg>` element of one icon document into a
//! `<symbol>` fragment: the tag is renamed, the fragment gets an `id`, and
//! attributes that only make sense on a standalone document (namespace
//! declarations, version, intrinsic size) are dropped.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Result, SpriteError};

/// Attributes removed from the root element. Removal is a no-op when an
/// attribute is absent.
const STRIPPED_ATTRIBUTES: [&[u8]; 5] =
    [b"xmlns", b"xmlns:xlink", b"version", b"width", b"height"];

/// Root tag expected on every icon source.
const ROOT_TAG: &[u8] = b"svg";

/// Tag the root element is renamed to.
const SYMBOL_TAG: &str = "symbol";

/// Transform one icon document into a `<symbol>` fragment.
///
/// Only the root `<svg>` element and its subtree are serialized; the XML
/// prolog, comments and anything else outside the root are dropped. Child
/// content and unlisted attributes pass through verbatim.
pub fn to_symbol(source: &str, id: &str) -> Result<String> {
    let mut reader = Reader::from_str(source);
    let mut writer = Writer::new(Vec::new());

    let mut depth = 0usize;
    let mut found = false;

    loop {
        let event = reader.read_event().map_err(|err| SpriteError::Parse {
            message: format!("malformed XML: {err}"),
            help: None,
        })?;

        match event {
            Event::Start(e) if !found && e.name().as_ref() == ROOT_TAG => {
                emit(&mut writer, Event::Start(symbol_start(&e, id)?))?;
                found = true;
                depth = 1;
            }
            Event::Empty(e) if !found && e.name().as_ref() == ROOT_TAG => {
                emit(&mut writer, Event::Empty(symbol_start(&e, id)?))?;
                found = true;
                break;
            }
            Event::Eof => break,
            Event::Start(e) if found => {
                depth += 1;
                emit(&mut writer, Event::Start(e))?;
            }
            Event::End(e) if found => {
                depth -= 1;
                if depth == 0 {
                    emit(&mut writer, Event::End(BytesEnd::new(SYMBOL_TAG)))?;
                    break;
                }
                emit(&mut writer, Event::End(e))?;
            }
            other if found => {
                emit(&mut writer, other)?;
            }
            _ => {}
        }
    }

    if !found {
        return Err(SpriteError::Parse {
            message: "no <svg> root element found".to_string(),
            help: Some("icon sources must have a top-level <svg> element".to_string()),
        });
    }

    if depth > 0 {
        return Err(SpriteError::Parse {
            message: "unclosed <svg> root element".to_string(),
            help: None,
        });
    }

    String::from_utf8(writer.into_inner()).map_err(|err| SpriteError::Parse {
        message: format!("fragment is not valid UTF-8: {err}"),
        help: None,
    })
}

/// Build the renamed start tag: attributes are copied minus the stripped
/// set, and `id` is overwritten in place when present, appended otherwise.
fn symbol_start<'a>(svg: &'a BytesStart<'a>, id: &'a str) -> Result<BytesStart<'a>> {
    let mut symbol = BytesStart::new(SYMBOL_TAG);
    let mut has_id = false;

    for attr in svg.attributes() {
        let attr = attr.map_err(|err| SpriteError::Parse {
            message: format!("malformed attribute on <svg>: {err}"),
            help: None,
        })?;

        let key = attr.key.as_ref();
        if STRIPPED_ATTRIBUTES.contains(&key) {
            continue;
        }
        if key == b"id" {
            symbol.push_attribute(("id", id));
            has_id = true;
            continue;
        }
        symbol.push_attribute(attr);
    }

    if !has_id {
        symbol.push_attribute(("id", id));
    }

    Ok(symbol)
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|err| SpriteError::Parse {
        message: format!("failed to serialize fragment: {err}"),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renames_root_and_strips_attributes() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M4 12h16"/></svg>"#;

        let symbol = to_symbol(source, "arrow").unwrap();

        assert_eq!(
            symbol,
            r#"<symbol viewBox="0 0 24 24" id="arrow"><path d="M4 12h16"/></symbol>"#
        );
    }

    #[test]
    fn test_strips_xlink_namespace_and_version() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1" viewBox="0 0 8 8"><rect width="8" height="8"/></svg>"#;

        let symbol = to_symbol(source, "block").unwrap();

        // width/height on children are untouched; only the root is stripped.
        assert_eq!(
            symbol,
            r#"<symbol viewBox="0 0 8 8" id="block"><rect width="8" height="8"/></symbol>"#
        );
    }

    #[test]
    fn test_absent_attributes_are_a_noop() {
        let source = r#"<svg viewBox="0 0 4 4"><g fill="none"><circle r="2"/></g></svg>"#;

        let symbol = to_symbol(source, "dot").unwrap();

        assert_eq!(
            symbol,
            r#"<symbol viewBox="0 0 4 4" id="dot"><g fill="none"><circle r="2"/></g></symbol>"#
        );
    }

    #[test]
    fn test_existing_id_is_replaced_in_place() {
        let source = r#"<svg id="old" viewBox="0 0 4 4"/>"#;

        let symbol = to_symbol(source, "new").unwrap();

        assert_eq!(symbol, r#"<symbol id="new" viewBox="0 0 4 4"/>"#);
    }

    #[test]
    fn test_content_less_root_still_transformed() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"/>"#;

        let symbol = to_symbol(source, "blank").unwrap();

        assert_eq!(symbol, r#"<symbol id="blank"/>"#);
    }

    #[test]
    fn test_prolog_and_trailing_content_dropped() {
        let source = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- exported -->\n<svg viewBox=\"0 0 8 8\"><rect/></svg>\n";

        let symbol = to_symbol(source, "box").unwrap();

        assert_eq!(symbol, r#"<symbol viewBox="0 0 8 8" id="box"><rect/></symbol>"#);
    }

    #[test]
    fn test_inner_text_and_entities_preserved() {
        let source = r#"<svg viewBox="0 0 4 4"><title>up &amp; away</title></svg>"#;

        let symbol = to_symbol(source, "up").unwrap();

        assert_eq!(
            symbol,
            r#"<symbol viewBox="0 0 4 4" id="up"><title>up &amp; away</title></symbol>"#
        );
    }

    #[test]
    fn test_missing_root_element_errors() {
        let err = to_symbol("<html><body/></html>", "nope").unwrap_err();

        match err {
            SpriteError::Parse { message, .. } => {
                assert!(message.contains("no <svg> root element"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_tags_error() {
        assert!(to_symbol("<svg><path></svg>", "broken").is_err());
    }

    #[test]
    fn test_unclosed_root_errors() {
        assert!(to_symbol("<svg viewBox=\"0 0 4 4\">", "broken").is_err());
    }
}
