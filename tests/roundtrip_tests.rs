//! Decoding encoder output with `quick-xml` gives back the input tree, up to the documented
//! losses: scalars come back as text, empty containers as empty elements, and a sequence of
//! one element is indistinguishable from the element itself.

use anyxml::{
    to_string_with_options, value, Escaping, Mapping, Scalar, Value, XmlOptions,
};
use quick_xml::events::Event;
use quick_xml::Reader;

struct Frame {
    name: String,
    children: Vec<(String, Value)>,
    text: String,
}

fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    let code = match entity.strip_prefix("#x") {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => entity.strip_prefix('#')?.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(String::from)
}

/// Same-named siblings collapse into a sequence.
fn group(children: Vec<(String, Value)>) -> Value {
    let mut grouped: Vec<(String, Vec<Value>)> = Vec::new();
    for (name, value) in children {
        match grouped.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value),
            None => grouped.push((name, vec![value])),
        }
    }

    let mut map = Mapping::new();
    for (name, mut values) in grouped {
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::Sequence(values)
        };
        map.insert(name, value);
    }
    Value::Mapping(map)
}

/// Parses a single-root document into its root name and content.
fn decode(xml: &str) -> (String, Value) {
    // No `trim_text`: text is split at entity references and the pieces keep their spaces.
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(Frame {
                name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                children: Vec::new(),
                text: String::new(),
            }),
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match stack.last_mut() {
                    Some(parent) => parent.children.push((name, Value::default())),
                    None => root = Some((name, Value::default())),
                }
            }
            Ok(Event::Text(e)) => {
                let text = String::from_utf8_lossy(e.as_ref());
                // Layout between tags in pretty output.
                if text.trim().is_empty() {
                    continue;
                }
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(frame) = stack.last_mut() {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    let resolved = resolve_entity(&entity)
                        .unwrap_or_else(|| panic!("unknown entity &{entity};"));
                    frame.text.push_str(&resolved);
                }
            }
            Ok(Event::End(_)) => {
                let frame = stack.pop().expect("unbalanced end tag");
                let value = if frame.children.is_empty() {
                    Value::from(frame.text)
                } else {
                    assert!(frame.text.is_empty(), "mixed content in <{}>", frame.name);
                    group(frame.children)
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push((frame.name, value)),
                    None => root = Some((frame.name, value)),
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("invalid XML at {}: {e}\n{xml}", reader.buffer_position()),
        }
    }

    assert!(stack.is_empty(), "unclosed elements in\n{xml}");
    root.expect("document has no root element")
}

/// The tree `decode` is expected to return for `value`.
fn normalize(value: &Value) -> Value {
    match value {
        Value::Scalar(Scalar::Null) => Value::default(),
        Value::Scalar(scalar) => Value::from(scalar.text().unwrap_or_default().into_owned()),
        Value::Mapping(map) if map.is_empty() => Value::from(""),
        Value::Mapping(map) => Value::Mapping(
            map.iter()
                .map(|(key, child)| (key.clone(), normalize(child)))
                .collect(),
        ),
        Value::Sequence(items) => match items.as_slice() {
            [] => Value::default(),
            [only] => normalize(only),
            _ => Value::Sequence(items.iter().map(normalize).collect()),
        },
        Value::Structured(_) => panic!("structured values have no dynamic form"),
    }
}

fn sample() -> Value {
    value!({
        "server": {
            "host": "a<b>&c",
            "port": 8080,
            "tls": true,
            "ratio": 0.25
        },
        "users": [
            {"name": "ann", "role": "admin"},
            {"name": "bob", "role": "dev & ops"}
        ],
        "tags": ["x", "y", "z"],
        "single": ["only"],
        "none": null,
        "nothing": [],
        "blank": {},
        "quote": "it's \"fine\""
    })
}

#[test]
fn test_compact_roundtrip() {
    let value = sample();
    let xml = to_string_with_options(&value, &XmlOptions::new()).unwrap();
    let (root, decoded) = decode(&xml);
    assert_eq!(root, "doc");
    assert_eq!(decoded, normalize(&value));
}

#[test]
fn test_pretty_roundtrip() {
    let value = sample();
    for indent in ["  ", "\t", "    "] {
        let options = XmlOptions::new().with_root_tag("config").with_indent(indent);
        let xml = to_string_with_options(&value, &options).unwrap();
        let (root, decoded) = decode(&xml);
        assert_eq!(root, "config");
        assert_eq!(decoded, normalize(&value), "indent {indent:?}");
    }
}

#[test]
fn test_strict_escaping_roundtrip() {
    let value = value!({"text": "col1\tcol2\r\nnext", "other": "<&>"});
    let options = XmlOptions::new().with_escaping(Escaping::strict());
    let xml = to_string_with_options(&value, &options).unwrap();
    assert!(!xml.contains('\t'));
    assert!(!xml.contains('\n'));

    let (_, decoded) = decode(&xml);
    assert_eq!(decoded, normalize(&value));
}

#[test]
fn test_bare_sequence_roundtrip() {
    let value = value!(["a", 1, false]);
    let options = XmlOptions::pretty().with_root_tag("list").with_element_tag("item");
    let xml = to_string_with_options(&value, &options).unwrap();

    let (root, decoded) = decode(&xml);
    assert_eq!(root, "list");
    assert_eq!(decoded, value!({"item": ["a", "1", "false"]}));
}

#[test]
fn test_promoted_elements_lose_their_wrapper() {
    let value = value!({"events": [{"start": 1}, {"stop": 2}]});
    let xml = to_string_with_options(&value, &XmlOptions::new()).unwrap();

    let (_, decoded) = decode(&xml);
    assert_eq!(decoded, value!({"start": "1", "stop": "2"}));
}
