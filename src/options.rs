//! Extraction of built-in descriptor options into type-service `Option` records.
//!
//! Each descriptor options message has a fixed table of the options this crate
//! knows about. Extraction walks the table in order and emits one record per
//! option that is explicitly set, so the output order is the table order.

use std::fmt;

use log::trace;
use prost_types::{
    EnumOptions, EnumValueOptions, FieldOptions, FileDescriptorProto, FileOptions, MessageOptions,
    MethodOptions, Option as ProtoOption, ServiceOptions,
};

use crate::value::{OptionValue, ValueKind};
use crate::{Error, Scope};

/// Reads one optional option field, typed by the value kind it produces.
pub enum Accessor<T> {
    Bool(fn(&T) -> Option<bool>),
    Int32(fn(&T) -> Option<i32>),
    String(fn(&T) -> Option<String>),
}

/// A named entry in an option table.
pub struct OptionSpec<T> {
    pub name: &'static str,
    pub accessor: Accessor<T>,
}

impl<T> OptionSpec<T> {
    pub fn kind(&self) -> ValueKind {
        match self.accessor {
            Accessor::Bool(_) => ValueKind::Bool,
            Accessor::Int32(_) => ValueKind::Int32,
            Accessor::String(_) => ValueKind::String,
        }
    }

    /// Returns the option's value if it is present on `options`.
    pub fn extract(&self, options: &T) -> Option<OptionValue> {
        match self.accessor {
            Accessor::Bool(get) => get(options).map(OptionValue::Bool),
            Accessor::Int32(get) => get(options).map(OptionValue::Int32),
            Accessor::String(get) => get(options).map(OptionValue::String),
        }
    }
}

impl<T> fmt::Debug for OptionSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

/// A descriptor options message with a fixed table of recognized options.
pub trait OptionTable: Sized + 'static {
    const TABLE: &'static [OptionSpec<Self>];
}

impl OptionTable for FileOptions {
    const TABLE: &'static [OptionSpec<Self>] = &[
        OptionSpec {
            name: "java_package",
            accessor: Accessor::String(|o| o.java_package.clone()),
        },
        OptionSpec {
            name: "java_outer_classname",
            accessor: Accessor::String(|o| o.java_outer_classname.clone()),
        },
        OptionSpec {
            name: "java_multiple_files",
            accessor: Accessor::Bool(|o| o.java_multiple_files),
        },
        OptionSpec {
            name: "java_generate_equals_and_hash",
            accessor: Accessor::Bool(|o| o.java_generate_equals_and_hash),
        },
        OptionSpec {
            name: "java_string_check_utf8",
            accessor: Accessor::Bool(|o| o.java_string_check_utf8),
        },
        OptionSpec {
            name: "optimize_for",
            accessor: Accessor::Int32(|o| o.optimize_for),
        },
        OptionSpec {
            name: "go_package",
            accessor: Accessor::String(|o| o.go_package.clone()),
        },
        OptionSpec {
            name: "cc_generic_services",
            accessor: Accessor::Bool(|o| o.cc_generic_services),
        },
        OptionSpec {
            name: "java_generic_services",
            accessor: Accessor::Bool(|o| o.java_generic_services),
        },
        OptionSpec {
            name: "py_generic_services",
            accessor: Accessor::Bool(|o| o.py_generic_services),
        },
        OptionSpec {
            name: "php_generic_services",
            accessor: Accessor::Bool(|o| o.php_generic_services),
        },
        OptionSpec {
            name: "deprecated",
            accessor: Accessor::Bool(|o| o.deprecated),
        },
        OptionSpec {
            name: "cc_enable_arenas",
            accessor: Accessor::Bool(|o| o.cc_enable_arenas),
        },
        OptionSpec {
            name: "objc_class_prefix",
            accessor: Accessor::String(|o| o.objc_class_prefix.clone()),
        },
        OptionSpec {
            name: "csharp_namespace",
            accessor: Accessor::String(|o| o.csharp_namespace.clone()),
        },
        OptionSpec {
            name: "swift_prefix",
            accessor: Accessor::String(|o| o.swift_prefix.clone()),
        },
        OptionSpec {
            name: "php_class_prefix",
            accessor: Accessor::String(|o| o.php_class_prefix.clone()),
        },
        OptionSpec {
            name: "php_namespace",
            accessor: Accessor::String(|o| o.php_namespace.clone()),
        },
    ];
}

impl OptionTable for FieldOptions {
    const TABLE: &'static [OptionSpec<Self>] = &[
        OptionSpec {
            name: "ctype",
            accessor: Accessor::Int32(|o| o.ctype),
        },
        OptionSpec {
            name: "packed",
            accessor: Accessor::Bool(|o| o.packed),
        },
        OptionSpec {
            name: "jstype",
            accessor: Accessor::Int32(|o| o.jstype),
        },
        OptionSpec {
            name: "lazy",
            accessor: Accessor::Bool(|o| o.lazy),
        },
        OptionSpec {
            name: "deprecated",
            accessor: Accessor::Bool(|o| o.deprecated),
        },
        OptionSpec {
            name: "weak",
            accessor: Accessor::Bool(|o| o.weak),
        },
    ];
}

impl OptionTable for MessageOptions {
    const TABLE: &'static [OptionSpec<Self>] = &[
        OptionSpec {
            name: "message_set_wire_format",
            accessor: Accessor::Bool(|o| o.message_set_wire_format),
        },
        OptionSpec {
            name: "no_standard_descriptor_accessor",
            accessor: Accessor::Bool(|o| o.no_standard_descriptor_accessor),
        },
        OptionSpec {
            name: "deprecated",
            accessor: Accessor::Bool(|o| o.deprecated),
        },
        OptionSpec {
            name: "map_entry",
            accessor: Accessor::Bool(|o| o.map_entry),
        },
    ];
}

impl OptionTable for EnumOptions {
    const TABLE: &'static [OptionSpec<Self>] = &[
        OptionSpec {
            name: "allow_alias",
            accessor: Accessor::Bool(|o| o.allow_alias),
        },
        OptionSpec {
            name: "deprecated",
            accessor: Accessor::Bool(|o| o.deprecated),
        },
    ];
}

impl OptionTable for EnumValueOptions {
    const TABLE: &'static [OptionSpec<Self>] = &[OptionSpec {
        name: "deprecated",
        accessor: Accessor::Bool(|o| o.deprecated),
    }];
}

impl OptionTable for ServiceOptions {
    const TABLE: &'static [OptionSpec<Self>] = &[OptionSpec {
        name: "deprecated",
        accessor: Accessor::Bool(|o| o.deprecated),
    }];
}

impl OptionTable for MethodOptions {
    const TABLE: &'static [OptionSpec<Self>] = &[
        OptionSpec {
            name: "deprecated",
            accessor: Accessor::Bool(|o| o.deprecated),
        },
        OptionSpec {
            name: "idempotency_level",
            accessor: Accessor::Int32(|o| o.idempotency_level),
        },
    ];
}

/// Builds the `Option` records for every recognized option set on `options`.
///
/// A missing options message yields no records.
pub fn extract_options<T: OptionTable>(options: Option<&T>) -> Result<Vec<ProtoOption>, Error> {
    let options = match options {
        Some(options) => options,
        None => return Ok(Vec::new()),
    };

    T::TABLE
        .iter()
        .filter_map(|spec| spec.extract(options).map(|value| (spec.name, value)))
        .map(|(name, value)| {
            trace!("    option: {} = {:?}", name, value);
            let value = value
                .to_any()
                .map_err(|error| Error::from(error).within(Scope::Option(name)))?;
            Ok(ProtoOption {
                name: name.to_owned(),
                value: Some(value),
            })
        })
        .collect()
}

/// Extracts the file-level options of `file`.
///
/// The type-service records have no slot for file options, so the translator
/// does not attach these anywhere; they are exposed for callers that want them.
pub fn file_options(file: &FileDescriptorProto) -> Result<Vec<ProtoOption>, Error> {
    extract_options(file.options.as_ref())
}
