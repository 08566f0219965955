//! Translation errors.

use std::fmt;

use prost::{DecodeError, EncodeError};

/// The root cause of a failed translation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The file declared a syntax marker other than `proto2` or `proto3`.
    #[error("unrecognized syntax {0}")]
    UnrecognizedSyntax(String),
    /// An option value could not be packed into an `Any`.
    #[error("could not encode option value")]
    Encode {
        #[source]
        source: EncodeError,
    },
    /// The input bytes are not a valid `FileDescriptorSet`.
    #[error("failed to parse file descriptor set")]
    Decode {
        #[source]
        source: DecodeError,
    },
}

/// A descriptor translation error.
///
/// Errors are fatal to the whole run. As an error propagates out of the
/// translator, every enclosing declaration adds a [`Scope`] to its path, so the
/// rendered message reads from the file down to the failing element.
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: ErrorKind,
    /// Stack of enclosing declarations, innermost first.
    scopes: Vec<Scope>,
}

/// One level of context in an [`Error`] path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Scope {
    File(String),
    /// Resolving the file's `syntax` marker.
    Syntax,
    Message(String),
    NestedMessage(String),
    Enum(String),
    EnumValue(String),
    Field(String),
    Extension(String),
    Service(String),
    Method(String),
    Option(&'static str),
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Error {
            inner: Box::new(Inner {
                kind,
                scopes: Vec::new(),
            }),
        }
    }

    pub(crate) fn unrecognized_syntax(syntax: impl Into<String>) -> Self {
        Error::new(ErrorKind::UnrecognizedSyntax(syntax.into()))
    }

    /// Wraps the error in one more enclosing scope.
    pub(crate) fn within(mut self, scope: Scope) -> Self {
        self.inner.scopes.push(scope);
        self
    }

    /// Get details about the root cause.
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Iterates the error path from the outermost scope (usually the file) down
    /// to the element that failed.
    pub fn path(&self) -> impl DoubleEndedIterator<Item = &Scope> {
        self.inner.scopes.iter().rev()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl From<EncodeError> for Error {
    fn from(source: EncodeError) -> Self {
        Error::new(ErrorKind::Encode { source })
    }
}

impl From<DecodeError> for Error {
    fn from(source: DecodeError) -> Self {
        Error::new(ErrorKind::Decode { source })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::File(name) => write!(f, "could not process proto file {}", name),
            Scope::Syntax => f.write_str("could not determine file syntax"),
            Scope::Message(name) => write!(f, "could not process message {}", name),
            Scope::NestedMessage(name) => write!(f, "could not process nested message {}", name),
            Scope::Enum(name) => write!(f, "could not process enum {}", name),
            Scope::EnumValue(name) => write!(f, "could not process enum value {}", name),
            Scope::Field(name) => write!(f, "could not process field {}", name),
            Scope::Extension(name) => write!(f, "could not process extension {}", name),
            Scope::Service(name) => write!(f, "could not process service {}", name),
            Scope::Method(name) => write!(f, "could not process method {}", name),
            Scope::Option(name) => write!(f, "could not process option {}", name),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.inner.kind)
            .field("path", &self.path().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scope in self.path() {
            write!(f, "{}: ", scope)?;
        }
        write!(f, "{}", self.inner.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.inner.kind)
    }
}
