use prost_types::Syntax;

use crate::Error;

/// Resolves a file's `syntax` marker.
///
/// An absent (or empty) marker means the file predates the marker and is `proto2`.
pub fn resolve_syntax(marker: Option<&str>) -> Result<Syntax, Error> {
    match marker {
        None | Some("") | Some("proto2") => Ok(Syntax::Proto2),
        Some("proto3") => Ok(Syntax::Proto3),
        Some(s) => Err(Error::unrecognized_syntax(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn absent_marker_defaults_to_proto2() {
        assert_eq!(resolve_syntax(None).unwrap(), Syntax::Proto2);
        assert_eq!(resolve_syntax(Some("")).unwrap(), Syntax::Proto2);
    }

    #[test]
    fn recognized_markers() {
        assert_eq!(resolve_syntax(Some("proto2")).unwrap(), Syntax::Proto2);
        assert_eq!(resolve_syntax(Some("proto3")).unwrap(), Syntax::Proto3);
    }

    #[test]
    fn unknown_marker_is_rejected() {
        for marker in ["proto7", "editions", "PROTO3"] {
            let error = resolve_syntax(Some(marker)).unwrap_err();
            match error.kind() {
                ErrorKind::UnrecognizedSyntax(s) => assert_eq!(s, marker),
                kind => panic!("unexpected error kind: {:?}", kind),
            }
        }
    }
}
