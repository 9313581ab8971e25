use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quick_xml::escape::escape;
use shapecall_types::Value;

use super::{CodecError, MethodResponse};

const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Encode a `methodCall` document.
///
/// Integers outside the 32-bit range are sent as `<string>` holding their
/// decimal text, which is how Robot Framework remote servers exchange 64-bit
/// values. Doubles are written in plain decimal notation.
///
/// # Errors
///
/// [`CodecError::NonFiniteDouble`] if any parameter contains NaN or an
/// infinity.
pub fn encode_call(method: &str, params: &[Value]) -> Result<String, CodecError> {
    let mut out = String::from(PROLOG);
    out.push_str("<methodCall><methodName>");
    out.push_str(&escape(method));
    out.push_str("</methodName><params>");
    for param in params {
        out.push_str("<param>");
        encode_value(param, &mut out)?;
        out.push_str("</param>");
    }
    out.push_str("</params></methodCall>");
    Ok(out)
}

/// Encode a `methodResponse` document.
///
/// # Errors
///
/// [`CodecError::NonFiniteDouble`] if the returned value contains NaN or an
/// infinity.
pub fn encode_response(response: &MethodResponse) -> Result<String, CodecError> {
    let mut out = String::from(PROLOG);
    out.push_str("<methodResponse>");
    match response {
        MethodResponse::Success(value) => {
            out.push_str("<params><param>");
            encode_value(value, &mut out)?;
            out.push_str("</param></params>");
        }
        MethodResponse::Fault(fault) => {
            out.push_str("<fault>");
            let body = Value::dict([
                ("faultCode", Value::from(fault.code)),
                ("faultString", Value::from(fault.message.as_str())),
            ]);
            encode_value(&body, &mut out)?;
            out.push_str("</fault>");
        }
    }
    out.push_str("</methodResponse>");
    Ok(out)
}

fn encode_value(value: &Value, out: &mut String) -> Result<(), CodecError> {
    out.push_str("<value>");
    match value {
        Value::Nil => out.push_str("<nil/>"),
        Value::Boolean(b) => {
            out.push_str(if *b { "<boolean>1</boolean>" } else { "<boolean>0</boolean>" });
        }
        Value::Integer(i) => match i32::try_from(*i) {
            Ok(small) => {
                out.push_str("<int>");
                out.push_str(&small.to_string());
                out.push_str("</int>");
            }
            Err(_) => {
                out.push_str("<string>");
                out.push_str(&i.to_string());
                out.push_str("</string>");
            }
        },
        Value::Double(d) => {
            if !d.is_finite() {
                return Err(CodecError::NonFiniteDouble(d.to_string()));
            }
            // `Display` for f64 never switches to exponent notation.
            out.push_str("<double>");
            out.push_str(&d.to_string());
            out.push_str("</double>");
        }
        Value::String(s) => {
            out.push_str("<string>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</string>");
        }
        Value::Binary(bytes) => {
            out.push_str("<base64>");
            out.push_str(&STANDARD.encode(bytes));
            out.push_str("</base64>");
        }
        Value::List(items) => {
            out.push_str("<array><data>");
            for item in items {
                encode_value(item, out)?;
            }
            out.push_str("</data></array>");
        }
        Value::Dict(map) => {
            out.push_str("<struct>");
            for (key, item) in map {
                out.push_str("<member><name>");
                out.push_str(&escape(key.as_str()));
                out.push_str("</name>");
                encode_value(item, out)?;
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
    }
    out.push_str("</value>");
    Ok(())
}
