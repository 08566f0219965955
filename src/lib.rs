//! `api-generator` translates a compiled Protocol Buffers schema, a
//! `FileDescriptorSet`, into the flattened records of the `google.protobuf`
//! type service: [`Type`], [`Enum`], [`EnumValue`](prost_types::EnumValue) and
//! [`Option`](prost_types::Option).
//!
//! Every message becomes a `Type` addressed by its fully-qualified name,
//! including messages nested inside other messages, and every built-in
//! descriptor option that is explicitly set becomes a named `Option` whose
//! value is a boxed wrapper message.
//!
//! ## Example
//!
//! ```rust,ignore
//! use prost::Message;
//! use prost_types::FileDescriptorSet;
//!
//! let bytes = std::fs::read("descriptor.pb")?;
//! let set = FileDescriptorSet::decode(bytes.as_slice())?;
//!
//! let output = api_generator::translate(&set)?;
//! for ty in &output.types {
//!     println!("{} ({} fields)", ty.name, ty.fields.len());
//! }
//! ```
//!
//! Translation is a pure function of the descriptor set: files are visited in
//! order, and within a file messages (pre-order, parents before nested
//! messages) come before enums. The first error aborts the whole run.

#![doc(html_root_url = "https://docs.rs/api-generator/0.1.0")]

use log::debug;
use prost::Message;
use prost_types::{Api, Enum, Field, FileDescriptorProto, FileDescriptorSet, Type};

mod error;
mod options;
mod syntax;
mod translator;
mod type_url;
mod value;

pub use crate::error::{Error, ErrorKind, Scope};
pub use crate::options::{extract_options, file_options, Accessor, OptionSpec, OptionTable};
pub use crate::syntax::resolve_syntax;
pub use crate::type_url::{type_url, TYPE_URL_PREFIX};
pub use crate::value::{BoolValue, Int32Value, OptionValue, StringValue, ValueKind};

use crate::translator::FileTranslator;

/// The records produced by a translation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Output {
    /// One record per message, nested messages included.
    pub types: Vec<Type>,
    pub enums: Vec<Enum>,
    /// Only populated when [`Config::emit_services`] is enabled.
    pub apis: Vec<Api>,
    /// Only populated when [`Config::collect_extensions`] is enabled.
    pub extensions: Vec<Field>,
}

impl Output {
    /// Appends all records of `other`, preserving their order.
    pub fn extend(&mut self, other: Output) {
        self.types.extend(other.types);
        self.enums.extend(other.enums);
        self.apis.extend(other.apis);
        self.extensions.extend(other.extensions);
    }

    pub fn len(&self) -> usize {
        self.types.len() + self.enums.len() + self.apis.len() + self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Configuration options for descriptor translation.
///
/// The default configuration emits exactly the message and enum records; the
/// builder methods opt in to the additional surfaces.
#[derive(Clone, Debug, Default)]
pub struct Config {
    emit_services: bool,
    collect_extensions: bool,
    nested_enums: bool,
}

impl Config {
    /// Creates a new translation configuration with default options.
    pub fn new() -> Config {
        Config::default()
    }

    /// Translate services into `Api` records.
    ///
    /// Each rpc becomes a `Method` whose request and response type URLs are
    /// built like field type URLs. Services are always visited, so their
    /// errors surface even when this is disabled.
    pub fn emit_services(&mut self, enabled: bool) -> &mut Self {
        self.emit_services = enabled;
        self
    }

    /// Keep the translated top-level extension fields in
    /// [`Output::extensions`].
    pub fn collect_extensions(&mut self, enabled: bool) -> &mut Self {
        self.collect_extensions = enabled;
        self
    }

    /// Also emit enums declared inside messages, qualified by the enclosing
    /// message's name.
    ///
    /// Nested enums are emitted while their message is visited, so they come
    /// before the top-level enums of the same file.
    pub fn nested_enums(&mut self, enabled: bool) -> &mut Self {
        self.nested_enums = enabled;
        self
    }

    /// Translates every file of `set`, in order.
    pub fn translate(&self, set: &FileDescriptorSet) -> Result<Output, Error> {
        let mut output = Output::default();
        for file in &set.file {
            output.extend(self.translate_file(file)?);
        }
        debug!(
            "translated {} files: {} types, {} enums, {} apis",
            set.file.len(),
            output.types.len(),
            output.enums.len(),
            output.apis.len()
        );
        Ok(output)
    }

    /// Translates the declarations of a single file.
    pub fn translate_file(&self, file: &FileDescriptorProto) -> Result<Output, Error> {
        FileTranslator::translate(self, file)
            .map_err(|error| error.within(Scope::File(file.name().to_owned())))
    }

    /// Decodes an encoded `FileDescriptorSet` and translates it.
    pub fn decode_and_translate(&self, bytes: &[u8]) -> Result<Output, Error> {
        let set = FileDescriptorSet::decode(bytes)?;
        self.translate(&set)
    }
}

/// Translates `set` with the default configuration.
pub fn translate(set: &FileDescriptorSet) -> Result<Output, Error> {
    Config::new().translate(set)
}
