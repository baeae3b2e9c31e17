use inplace_xml::events::{Event, Event::*, Recorder};
use inplace_xml::{parse, Flags};

use pretty_assertions::assert_eq;

/// Parses `xml` and returns events between `EndAttributes` of the root element
/// and its `EndElement`
fn content(xml: &[u8], flags: Flags) -> Vec<Event<'static>> {
    let buf = Box::leak(xml.to_vec().into_boxed_slice());
    let mut recorder = Recorder::new();
    parse(buf, flags, &mut recorder).unwrap();
    let events = recorder.into_events();
    let start = events.iter().position(|e| *e == EndAttributes).unwrap() + 1;
    events[start..events.len() - 2].to_vec()
}

/// Parses `<a v='{value}'/>` and returns the attribute value
fn attribute(value: &str, flags: Flags) -> Vec<u8> {
    let mut buf = format!("<a v='{}'/>", value).into_bytes();
    let mut recorder = Recorder::new();
    parse(&mut buf, flags, &mut recorder).unwrap();
    match recorder.events[2] {
        Attribute(b"v", value) => value.to_vec(),
        e => panic!("expected attribute, got {:?}", e),
    }
}

mod character_reference {
    use super::*;
    use pretty_assertions::assert_eq;

    mod dec {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn ascii() {
            for i in 1..=0x7Fu8 {
                let xml = format!("<a>&#{};</a>", i);
                let expected = [i];
                let text = content(xml.as_bytes(), Flags::ENTITY_TRANSLATION);
                assert_eq!(text, [Text(&expected)], "Character reference {}", i);
            }
        }

        #[test]
        fn leading_zeroes() {
            assert_eq!(
                content(b"<a>&#0000065;</a>", Flags::ENTITY_TRANSLATION),
                [Text(b"A")]
            );
        }

        #[test]
        fn truncated() {
            // U+0141: only the lowest byte is kept
            assert_eq!(
                content(b"<a>&#321;</a>", Flags::ENTITY_TRANSLATION),
                [Text(b"A")]
            );
            assert_eq!(
                content(b"<a>&#256;x</a>", Flags::ENTITY_TRANSLATION),
                [Text(b"\0x")]
            );
        }
    }

    mod hex {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn ascii() {
            for i in 1..=0x7Fu8 {
                let expected = [i];
                for xml in [format!("<a>&#x{:x};</a>", i), format!("<a>&#x{:X};</a>", i)] {
                    let text = content(xml.as_bytes(), Flags::ENTITY_TRANSLATION);
                    assert_eq!(text, [Text(&expected)], "Character reference {}", xml);
                }
            }
        }

        #[test]
        fn attribute_value() {
            assert_eq!(attribute("&#x49;&#x44;", Flags::ENTITY_TRANSLATION), b"ID");
        }

        #[test]
        fn truncated() {
            assert_eq!(
                content(b"<a>&#x20AC;</a>", Flags::ENTITY_TRANSLATION),
                [Text(b"\xAC")]
            );
        }
    }

    #[test]
    fn not_decoded_without_flag() {
        assert_eq!(content(b"<a>&#65;</a>", Flags::NONE), [Text(b"&#65;")]);
        assert_eq!(attribute("&#x49;&#x44;", Flags::NONE), b"&#x49;&#x44;");
    }
}

mod general_entity_reference {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn predefined() {
        assert_eq!(
            content(
                b"<a>&lt;&gt;&amp;&apos;&quot;</a>",
                Flags::ENTITY_TRANSLATION
            ),
            [Text(b"<>&'\"")]
        );
    }

    #[test]
    fn decoded_once() {
        assert_eq!(
            content(b"<a>a&amp;b &amp;amp;</a>", Flags::ENTITY_TRANSLATION),
            [Text(b"a&b &amp;")]
        );
    }

    #[test]
    fn in_attributes() {
        assert_eq!(
            attribute("&lt;&quot;x&quot;&gt; &amp; &apos;y&apos;", Flags::DEFAULT),
            br#"<"x"> & 'y'"#
        );
    }

    #[test]
    fn not_decoded_in_markup() {
        assert_eq!(
            content(
                b"<a><!--&amp;--><![CDATA[&amp;]]><?pi &amp;?></a>",
                Flags::DEFAULT
            ),
            [Comment(b"&amp;"), CData(b"&amp;"), PI(b"pi", b"&amp;")]
        );
    }

    #[test]
    fn not_decoded_without_flag() {
        assert_eq!(
            content(b"<a>&lt;b&gt;</a>", Flags::TRIM_SPACE),
            [Text(b"&lt;b&gt;")]
        );
        // unknown references are not an error either
        assert_eq!(
            content(b"<a>&nbsp;</a>", Flags::NONE),
            [Text(b"&nbsp;")]
        );
    }
}

#[test]
fn unescape_in_place() {
    use inplace_xml::escape::unescape_in_place;

    let mut buf = *b"a&amp;b";
    let len = unescape_in_place(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"a&b");

    let mut buf = *b"no references";
    assert_eq!(unescape_in_place(&mut buf), Ok(13));

    let mut buf = *b"&#65;&#x41;";
    let len = unescape_in_place(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"AA");

    let mut buf = *b"x&foo;";
    let error = unescape_in_place(&mut buf).unwrap_err();
    assert_eq!(error.position, 1);
}
