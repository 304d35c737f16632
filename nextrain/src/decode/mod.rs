//! Decoding of Irish Rail XML payloads into domain records.
//!
//! Decoding is pure and has no failure channel: a document that is not
//! UTF-8, not well-formed, or not of the expected shape decodes to an empty
//! list, and individual entries missing a field are skipped.
//!
//! Elements are matched by local name, so the API's default namespace
//! (`http://api.irishrail.ie/realtime/`) does not matter.

mod stations;
mod trains;

pub use stations::decode_station_list;
pub use trains::decode_trains_from_station;

use roxmltree::{Document, Node};

/// Parse a payload, or `None` if it is not a well-formed UTF-8 XML document.
fn parse_document(bytes: &[u8]) -> Option<Document<'_>> {
    let text = std::str::from_utf8(bytes).ok()?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Document::parse(text).ok()
}

/// The repeated `item` elements under a root element named `root`.
///
/// Empty if the document root has another name.
fn repeated<'a, 'input>(
    doc: &'a Document<'input>,
    root: &'static str,
    item: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    let root_elem = doc.root_element();
    let matches_root = root_elem.tag_name().name() == root;
    root_elem
        .children()
        .filter(move |n| matches_root && n.is_element() && n.tag_name().name() == item)
}

/// Text of the first child element called `name`.
///
/// A present but empty element yields `Some("")`; a missing one yields `None`.
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .map(|n| n.text().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_utf8() {
        assert!(parse_document(&[0xff, 0xfe, 0x00]).is_none());
    }

    #[test]
    fn rejects_malformed_xml() {
        assert!(parse_document(b"<a><b></a>").is_none());
        assert!(parse_document(b"").is_none());
    }

    #[test]
    fn accepts_byte_order_mark() {
        let doc = parse_document("\u{feff}<a/>".as_bytes()).unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "a");
    }

    #[test]
    fn repeated_requires_root_name() {
        let doc = parse_document(b"<list><item/><other/><item/></list>").unwrap();
        assert_eq!(repeated(&doc, "list", "item").count(), 2);
        assert_eq!(repeated(&doc, "wrong", "item").count(), 0);
    }

    #[test]
    fn child_text_present_empty_and_missing() {
        let doc = parse_document(b"<a><full>x</full><empty/></a>").unwrap();
        let root = doc.root_element();
        assert_eq!(child_text(root, "full"), Some("x"));
        assert_eq!(child_text(root, "empty"), Some(""));
        assert_eq!(child_text(root, "missing"), None);
    }
}
