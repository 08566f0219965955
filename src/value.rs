//! Typed option values and their `Any` representation.
//!
//! Option values are boxed into `google.protobuf.Any` using the wrapper
//! messages from `google/protobuf/wrappers.proto`, as the type service expects.
//! `prost-types` maps those wrappers onto Rust primitives, so the three wrappers
//! needed here are declared locally.

use prost::{EncodeError, Name};
use prost_types::Any;

use crate::type_url::type_url;

const WRAPPERS_PACKAGE: &str = "google.protobuf";

/// Wrapper message for `bool`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolValue {
    #[prost(bool, tag = "1")]
    pub value: bool,
}

/// Wrapper message for `int32`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Int32Value {
    #[prost(int32, tag = "1")]
    pub value: i32,
}

/// Wrapper message for `string`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringValue {
    #[prost(string, tag = "1")]
    pub value: String,
}

macro_rules! impl_wrapper_name {
    ($ty:ident) => {
        impl Name for $ty {
            const NAME: &'static str = stringify!($ty);
            const PACKAGE: &'static str = WRAPPERS_PACKAGE;

            fn type_url() -> String {
                type_url(&Self::full_name())
            }
        }
    };
}

impl_wrapper_name!(BoolValue);
impl_wrapper_name!(Int32Value);
impl_wrapper_name!(StringValue);

/// The value kinds an option can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int32,
    String,
}

/// A single option value, before it is boxed into an `Any`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Int32(i32),
    String(String),
}

impl OptionValue {
    /// Packs the value into an `Any` holding the matching wrapper message.
    pub fn to_any(&self) -> Result<Any, EncodeError> {
        match self {
            OptionValue::Bool(value) => Any::from_msg(&BoolValue { value: *value }),
            OptionValue::Int32(value) => Any::from_msg(&Int32Value { value: *value }),
            OptionValue::String(value) => Any::from_msg(&StringValue {
                value: value.clone(),
            }),
        }
    }

    /// Unpacks a value previously produced by [`OptionValue::to_any`].
    ///
    /// Returns `None` if the `Any` holds some other message type, or if its
    /// payload does not decode.
    pub fn from_any(any: &Any) -> Option<Self> {
        if any.type_url == BoolValue::type_url() {
            any.to_msg::<BoolValue>()
                .ok()
                .map(|wrapper| OptionValue::Bool(wrapper.value))
        } else if any.type_url == Int32Value::type_url() {
            any.to_msg::<Int32Value>()
                .ok()
                .map(|wrapper| OptionValue::Int32(wrapper.value))
        } else if any.type_url == StringValue::type_url() {
            any.to_msg::<StringValue>()
                .ok()
                .map(|wrapper| OptionValue::String(wrapper.value))
        } else {
            None
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int32(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_owned())
    }
}
