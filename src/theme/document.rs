use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{ThemeEntries, ThemeError, ThemeResult};

const NAME_ATTR: &[u8] = b"name";
const COLOR_ATTR: &[u8] = b"color";

/// A theme as declared by its source, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDocument {
    pub name: String,
    pub entries: ThemeEntries,
}

/// Parse a theme document.
///
/// The root element carries the theme `name`; each direct child is a role
/// whose tag name is the role id and whose `color` attribute is the color.
/// Children without a `color` attribute and deeper descendants are ignored.
pub fn parse_theme_document(xml: &str) -> ThemeResult<ThemeDocument> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut name: Option<String> = None;
    let mut entries = ThemeEntries::new();
    let mut depth = 0usize;
    let mut root_closed = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                if root_closed {
                    return Err(ThemeError::TrailingContent);
                }
                match depth {
                    0 => name = Some(root_name(e)?),
                    1 => collect_entry(e, &mut entries)?,
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(ref e) => {
                if root_closed {
                    return Err(ThemeError::TrailingContent);
                }
                match depth {
                    0 => {
                        name = Some(root_name(e)?);
                        root_closed = true;
                    }
                    1 => collect_entry(e, &mut entries)?,
                    _ => {}
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(ThemeError::UnclosedRoot);
    }
    let name = name.ok_or(ThemeError::MissingRoot)?;
    Ok(ThemeDocument { name, entries })
}

fn root_name(root: &BytesStart) -> ThemeResult<String> {
    let name = find_attr(root, NAME_ATTR)?.ok_or(ThemeError::MissingName)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ThemeError::MissingName);
    }
    Ok(name.to_string())
}

fn collect_entry(element: &BytesStart, entries: &mut ThemeEntries) -> ThemeResult<()> {
    let Some(color) = find_attr(element, COLOR_ATTR)? else {
        return Ok(());
    };
    let role = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    entries.insert(role, color);
    Ok(())
}

fn find_attr(element: &BytesStart, key: &[u8]) -> ThemeResult<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_role_colors() {
        let doc = parse_theme_document(
            r##"<?xml version="1.0" encoding="utf-8"?>
            <colorTheme id="7" name="Zenburn" author="someone">
                <foreground color="#DCDCCC" />
                <keyword color="#EFEFAF"></keyword>
            </colorTheme>"##,
        )
        .unwrap();

        assert_eq!(doc.name, "Zenburn");
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries["foreground"], "#DCDCCC");
        assert_eq!(doc.entries["keyword"], "#EFEFAF");
    }

    #[test]
    fn ignores_children_without_color_and_nested_elements() {
        let doc = parse_theme_document(
            r##"<theme name="Nested">
                <string color="#CC9393" />
                <bracket bold="true" />
                <group color="#111111">
                    <inner color="#222222" />
                </group>
            </theme>"##,
        )
        .unwrap();

        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries["string"], "#CC9393");
        assert_eq!(doc.entries["group"], "#111111");
        assert!(!doc.entries.contains_key("bracket"));
        assert!(!doc.entries.contains_key("inner"));
    }

    #[test]
    fn empty_root_yields_theme_without_entries() {
        let doc = parse_theme_document(r#"<theme name="Blank"/>"#).unwrap();
        assert_eq!(doc.name, "Blank");
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn unescapes_attribute_entities() {
        let doc = parse_theme_document(
            r##"<theme name="Black &amp; White"><foreground color="&quot;#FFF&quot;"/></theme>"##,
        )
        .unwrap();
        assert_eq!(doc.name, "Black & White");
        assert_eq!(doc.entries["foreground"], "\"#FFF\"");
    }

    #[test]
    fn resolves_character_references_in_attributes() {
        let doc = parse_theme_document(
            r##"<theme name="N"><foreground color="&#35;FFFFFF"/><keyword color="&#x23;EFEFAF"/></theme>"##,
        )
        .unwrap();
        assert_eq!(doc.entries["foreground"], "#FFFFFF");
        assert_eq!(doc.entries["keyword"], "#EFEFAF");
    }

    #[test]
    fn rejects_unknown_entity_in_attribute() {
        let err = parse_theme_document(r##"<theme name="N"><foreground color="&bogus;"/></theme>"##)
            .unwrap_err();
        assert!(matches!(err, ThemeError::Xml(_)));
    }

    #[test]
    fn rejects_missing_or_blank_name() {
        let err = parse_theme_document(r##"<theme><foreground color="#FFF"/></theme>"##)
            .unwrap_err();
        assert!(matches!(err, ThemeError::MissingName));

        let err = parse_theme_document(r#"<theme name="  "/>"#).unwrap_err();
        assert!(matches!(err, ThemeError::MissingName));
    }

    #[test]
    fn rejects_document_without_root() {
        let err = parse_theme_document("").unwrap_err();
        assert!(matches!(err, ThemeError::MissingRoot));
    }

    #[test]
    fn rejects_mismatched_end_tag() {
        let err = parse_theme_document(r##"<theme name="x"><foreground color="#FFF"></theme>"##)
            .unwrap_err();
        assert!(matches!(err, ThemeError::Xml(_)));
    }

    #[test]
    fn rejects_unclosed_root() {
        let err = parse_theme_document(r##"<theme name="x"><foreground color="#FFF"/>"##)
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::UnclosedRoot | ThemeError::Xml(_)
        ));
    }

    #[test]
    fn rejects_second_root_element() {
        let err = parse_theme_document(r#"<theme name="a"/><theme name="b"/>"#).unwrap_err();
        assert!(matches!(err, ThemeError::TrailingContent));
    }
}
