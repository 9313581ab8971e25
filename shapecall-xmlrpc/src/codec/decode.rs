use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use shapecall_types::{Fault, Mapping, Value};

use super::{CodecError, MethodResponse};

/// Deepest element nesting a document may have. Bounds the recursion in
/// `decode_value` and in dropping the element tree.
const MAX_DEPTH: usize = 256;

/// Decode a `methodResponse` document.
///
/// Documents nested deeper than 256 elements are rejected with
/// [`CodecError::TooDeep`].
pub fn decode_response(xml: &str) -> Result<MethodResponse, CodecError> {
    let root = parse_tree(xml)?;
    root.expect_name("methodResponse")?;

    if let Some(fault) = root.child("fault") {
        let value = decode_value(fault.required("value")?)?;
        return decode_fault(value).map(MethodResponse::Fault);
    }

    let param = root.required("params")?.required("param")?;
    decode_value(param.required("value")?).map(MethodResponse::Success)
}

/// Decode a `methodCall` document into its method name and parameters.
pub fn decode_call(xml: &str) -> Result<(String, Vec<Value>), CodecError> {
    let root = parse_tree(xml)?;
    root.expect_name("methodCall")?;

    let method = root.required("methodName")?.text.trim().to_owned();
    let params = match root.child("params") {
        Some(params) => params
            .children_named("param")
            .map(|param| decode_value(param.required("value")?))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };
    Ok((method, params))
}

fn decode_fault(value: Value) -> Result<Fault, CodecError> {
    let mut members = match value {
        Value::Dict(members) => members,
        other => {
            return Err(CodecError::MalformedFault(format!(
                "expected struct, found {}",
                other.kind_name()
            )));
        }
    };
    let code = match members.remove("faultCode") {
        Some(Value::Integer(code)) => i32::try_from(code)
            .map_err(|_| CodecError::MalformedFault(format!("faultCode {code} out of range")))?,
        Some(other) => {
            return Err(CodecError::MalformedFault(format!(
                "faultCode is {}",
                other.kind_name()
            )));
        }
        None => return Err(CodecError::MalformedFault("missing faultCode".into())),
    };
    let message = match members.remove("faultString") {
        Some(Value::String(message)) => message,
        Some(other) => {
            return Err(CodecError::MalformedFault(format!(
                "faultString is {}",
                other.kind_name()
            )));
        }
        None => return Err(CodecError::MalformedFault("missing faultString".into())),
    };
    Ok(Fault::new(code, message))
}

/// Decode a `<value>` element. Bare text without a type element is a string.
fn decode_value(element: &Element) -> Result<Value, CodecError> {
    element.expect_name("value")?;
    match element.children.as_slice() {
        [] => Ok(Value::String(element.text.clone())),
        [typed] => decode_typed(typed),
        [_, extra, ..] => Err(CodecError::Unexpected {
            expected: "/value",
            found: extra.name.clone(),
        }),
    }
}

fn decode_typed(element: &Element) -> Result<Value, CodecError> {
    match element.name.as_str() {
        "int" | "i4" | "i8" => element
            .text
            .trim()
            .parse()
            .map(Value::Integer)
            .map_err(|_| element.invalid()),
        "boolean" => match element.text.trim() {
            "1" => Ok(Value::Boolean(true)),
            "0" => Ok(Value::Boolean(false)),
            _ => Err(element.invalid()),
        },
        "double" => element
            .text
            .trim()
            .parse()
            .map(Value::Double)
            .map_err(|_| element.invalid()),
        "string" => Ok(Value::String(element.text.clone())),
        "dateTime.iso8601" => Ok(Value::String(element.text.trim().to_owned())),
        "base64" => {
            let compact: String = element
                .text
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            STANDARD
                .decode(compact)
                .map(Value::Binary)
                .map_err(|_| element.invalid())
        }
        "nil" => Ok(Value::Nil),
        "array" => element
            .required("data")?
            .children_named("value")
            .map(decode_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        "struct" => {
            let mut map = Mapping::new();
            for member in element.children_named("member") {
                let name = member.required("name")?.text.clone();
                let value = decode_value(member.required("value")?)?;
                map.insert(name, value);
            }
            Ok(Value::Dict(map))
        }
        other => Err(CodecError::UnknownType(other.to_owned())),
    }
}

/// Minimal element tree. Text is accumulated verbatim; whitespace between
/// structural children is ignored by the decoders above.
#[derive(Debug, Default)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            ..Self::default()
        }
    }

    fn expect_name(&self, expected: &'static str) -> Result<(), CodecError> {
        if self.name == expected {
            Ok(())
        } else {
            Err(CodecError::Unexpected {
                expected,
                found: self.name.clone(),
            })
        }
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn required(&self, name: &'static str) -> Result<&Element, CodecError> {
        self.child(name).ok_or(CodecError::Missing(name))
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    fn invalid(&self) -> CodecError {
        CodecError::InvalidScalar {
            tag: self.name.clone(),
            text: self.text.clone(),
        }
    }
}

fn parse_tree(xml: &str) -> Result<Element, CodecError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| CodecError::Syntax(e.to_string()))?;
        match event {
            Event::Start(_) | Event::Empty(_) if open.len() >= MAX_DEPTH => {
                return Err(CodecError::TooDeep(MAX_DEPTH));
            }
            Event::Start(start) => open.push(Element::open(&start)),
            Event::Empty(start) => attach(&mut open, &mut root, Element::open(&start))?,
            Event::End(_) => {
                let closed = open
                    .pop()
                    .ok_or_else(|| CodecError::Syntax("unbalanced end tag".into()))?;
                attach(&mut open, &mut root, closed)?;
            }
            Event::Text(text) => {
                if let Some(current) = open.last_mut() {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| CodecError::Syntax(e.to_string()))?;
                    current.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !open.is_empty() {
        return Err(CodecError::Syntax("unexpected end of document".into()));
    }
    root.ok_or_else(|| CodecError::Syntax("document has no root element".into()))
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), CodecError> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(CodecError::Syntax("multiple root elements".into())),
    }
    Ok(())
}
