//! Typed views of Robot Framework remote API results.

use std::collections::BTreeMap;

use shapecall_types::{Fault, Mapping, Value};
use thiserror::Error;

/// Key under which `get_library_information` reports library documentation.
pub const INTRO_KEY: &str = "__intro__";
/// Key under which `get_library_information` reports the library constructor.
pub const INIT_KEY: &str = "__init__";

/// Placeholder remote servers send in place of a missing value.
const NONE_PLACEHOLDER: &str = "None";

/// A result value did not have the structure the remote API defines.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultFormatError {
    /// A struct was required.
    #[error("expected a struct, found {0}")]
    NotAStruct(&'static str),

    /// A required member is absent.
    #[error("missing `{0}` member")]
    MissingMember(&'static str),

    /// A member holds a value of the wrong type.
    #[error("member `{member}` is {found}, expected {expected}")]
    WrongType {
        /// Member name.
        member: String,
        /// Expected value kind.
        expected: &'static str,
        /// Value kind actually present.
        found: &'static str,
    },

    /// `status` is neither `PASS` nor `FAIL`.
    #[error("unknown keyword status {0:?}")]
    UnknownStatus(String),
}

/// Outcome reported in a `run_keyword` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordStatus {
    /// The keyword succeeded.
    Pass,
    /// The keyword raised.
    Fail,
}

impl KeywordStatus {
    /// Wire spelling (`PASS` / `FAIL`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

/// The struct returned by `run_keyword`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordResult {
    /// Pass or fail.
    pub status: KeywordStatus,
    /// Log output captured during execution.
    pub output: String,
    /// The keyword's return value. Servers send an empty string for "no value".
    pub return_value: Value,
    /// Error message when failed.
    pub error: String,
    /// Traceback when failed.
    pub traceback: String,
    /// Whether a failure lets the test continue.
    pub continuable: bool,
    /// Whether a failure stops the whole run.
    pub fatal: bool,
}

impl KeywordResult {
    /// Decode a `run_keyword` result struct. Only `status` is required.
    pub fn from_value(value: Value) -> Result<Self, ResultFormatError> {
        let mut members = into_struct(value)?;

        let status = match take_string(&mut members, "status")? {
            Some(s) if s == KeywordStatus::Pass.as_str() => KeywordStatus::Pass,
            Some(s) if s == KeywordStatus::Fail.as_str() => KeywordStatus::Fail,
            Some(other) => return Err(ResultFormatError::UnknownStatus(other)),
            None => return Err(ResultFormatError::MissingMember("status")),
        };

        Ok(Self {
            status,
            output: take_string(&mut members, "output")?.unwrap_or_default(),
            return_value: members
                .remove("return")
                .unwrap_or_else(|| Value::from("")),
            error: take_string(&mut members, "error")?.unwrap_or_default(),
            traceback: take_string(&mut members, "traceback")?.unwrap_or_default(),
            continuable: take_bool(&mut members, "continuable")?,
            fatal: take_bool(&mut members, "fatal")?,
        })
    }

    /// Whether the keyword passed.
    pub fn is_pass(&self) -> bool {
        self.status == KeywordStatus::Pass
    }

    /// The return value on pass, or the failure details on fail.
    pub fn into_return(self) -> Result<Value, KeywordFailure> {
        match self.status {
            KeywordStatus::Pass => Ok(self.return_value),
            KeywordStatus::Fail => Err(KeywordFailure {
                message: self.error,
                traceback: self.traceback,
                continuable: self.continuable,
                fatal: self.fatal,
            }),
        }
    }
}

/// A keyword that ran and reported `FAIL`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("keyword failed: {message}")]
pub struct KeywordFailure {
    /// The keyword's error message.
    pub message: String,
    /// The keyword's traceback, possibly empty.
    pub traceback: String,
    /// Whether the failure lets the test continue.
    pub continuable: bool,
    /// Whether the failure stops the whole run.
    pub fatal: bool,
}

/// A failed keyword surfaces through [`shapecall_types::Transport`] as a
/// [`Fault::APPLICATION_ERROR`] fault carrying the keyword's error message.
impl From<KeywordFailure> for Fault {
    fn from(failure: KeywordFailure) -> Self {
        Fault::application(failure.message)
    }
}

/// Metadata for one keyword, as advertised by `get_library_information`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordInfo {
    /// Argument specs, e.g. `["value", "optional=99"]`.
    pub args: Vec<String>,
    /// Argument type names, e.g. `["list[int]"]`.
    pub types: Vec<String>,
    /// Keyword tags.
    pub tags: Vec<String>,
    /// Documentation.
    pub doc: Option<String>,
}

impl KeywordInfo {
    fn from_value(name: &str, value: Value) -> Result<Self, ResultFormatError> {
        let mut members = match value {
            Value::Dict(members) => members,
            other => return Err(wrong_type(name, "struct", &other)),
        };
        Ok(Self {
            args: take_string_list(&mut members, "args")?,
            types: take_string_list(&mut members, "types")?,
            tags: take_string_list(&mut members, "tags")?,
            doc: take_string(&mut members, "doc")?.filter(|doc| doc != NONE_PLACEHOLDER),
        })
    }
}

/// Decoded `get_library_information` result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryInformation {
    /// Library-level documentation from the `__intro__` entry.
    pub intro: Option<String>,
    /// Constructor metadata from the `__init__` entry.
    pub init: Option<KeywordInfo>,
    /// Keywords by name.
    pub keywords: BTreeMap<String, KeywordInfo>,
}

impl LibraryInformation {
    /// Decode a `get_library_information` struct.
    ///
    /// `"None"` placeholders and nil values read as absent.
    pub fn from_value(value: Value) -> Result<Self, ResultFormatError> {
        let members = into_struct(value)?;
        let mut info = Self::default();
        for (name, entry) in members {
            let keyword = KeywordInfo::from_value(&name, entry)?;
            match name.as_str() {
                INTRO_KEY => info.intro = keyword.doc,
                INIT_KEY => info.init = Some(keyword),
                _ => {
                    info.keywords.insert(name, keyword);
                }
            }
        }
        Ok(info)
    }

    /// Metadata for `name`, if the library has that keyword.
    pub fn keyword(&self, name: &str) -> Option<&KeywordInfo> {
        self.keywords.get(name)
    }

    /// Keyword names in sorted order.
    pub fn keyword_names(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(String::as_str)
    }
}

fn into_struct(value: Value) -> Result<Mapping, ResultFormatError> {
    match value {
        Value::Dict(members) => Ok(members),
        other => Err(ResultFormatError::NotAStruct(other.kind_name())),
    }
}

fn is_absent(value: &Value) -> bool {
    value.is_nil() || value.as_str() == Some(NONE_PLACEHOLDER)
}

fn take_string(
    members: &mut Mapping,
    member: &'static str,
) -> Result<Option<String>, ResultFormatError> {
    match members.remove(member) {
        None | Some(Value::Nil) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(wrong_type(member, "string", &other)),
    }
}

fn take_bool(members: &mut Mapping, member: &'static str) -> Result<bool, ResultFormatError> {
    match members.remove(member) {
        None | Some(Value::Nil) => Ok(false),
        Some(Value::Boolean(b)) => Ok(b),
        Some(other) => Err(wrong_type(member, "boolean", &other)),
    }
}

fn take_string_list(
    members: &mut Mapping,
    member: &'static str,
) -> Result<Vec<String>, ResultFormatError> {
    match members.remove(member) {
        None => Ok(Vec::new()),
        Some(value) if is_absent(&value) => Ok(Vec::new()),
        Some(Value::List(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(wrong_type(member, "string", &other)),
            })
            .collect(),
        Some(other) => Err(wrong_type(member, "array", &other)),
    }
}

fn wrong_type(member: &str, expected: &'static str, found: &Value) -> ResultFormatError {
    ResultFormatError::WrongType {
        member: member.to_owned(),
        expected,
        found: found.kind_name(),
    }
}
