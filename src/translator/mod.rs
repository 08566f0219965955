use log::{debug, trace};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, Field, FieldDescriptorProto,
    FileDescriptorProto, ServiceDescriptorProto, SourceContext, Syntax,
};

use crate::options::{extract_options, file_options};
use crate::syntax::resolve_syntax;
use crate::{Config, Error, Output, Scope};

mod enums;
mod fields;
mod messages;
mod services;

pub(crate) use fields::translate_field;

/// Translates the declarations of a single file.
///
/// The file's package, name and resolved syntax are fixed for the whole file
/// and stamped onto every record produced from it.
pub(crate) struct FileTranslator<'a> {
    config: &'a Config,
    package: &'a str,
    file_name: &'a str,
    syntax: Syntax,
}

impl<'a> FileTranslator<'a> {
    pub(crate) fn translate(
        config: &'a Config,
        file: &'a FileDescriptorProto,
    ) -> Result<Output, Error> {
        let syntax =
            resolve_syntax(file.syntax.as_deref()).map_err(|error| error.within(Scope::Syntax))?;
        let translator = FileTranslator {
            config,
            package: file.package(),
            file_name: file.name(),
            syntax,
        };

        debug!(
            "file: {:?}, package: {:?}, syntax: {:?}",
            translator.file_name, translator.package, translator.syntax
        );

        let mut output = Output::default();
        output.extend(translator.push_messages(&file.message_type)?);
        output.enums.extend(translator.push_enums(&file.enum_type)?);

        let apis = translator.push_services(&file.service)?;
        if config.emit_services {
            output.apis.extend(apis);
        }

        let extensions = translator.push_extensions(&file.extension)?;
        if config.collect_extensions {
            output.extensions.extend(extensions);
        }

        // Validated, but type-service records have nowhere to carry them.
        let options = file_options(file)?;
        debug!("  file options: {}", options.len());

        Ok(output)
    }

    fn push_extensions(&self, extensions: &[FieldDescriptorProto]) -> Result<Vec<Field>, Error> {
        extensions
            .iter()
            .map(|extension| {
                debug!("  extension: {:?}", extension.name());
                translate_field(extension)
                    .map_err(|error| error.within(Scope::Extension(extension.name().to_owned())))
            })
            .collect()
    }

    fn source_context(&self) -> Option<SourceContext> {
        Some(SourceContext {
            file_name: self.file_name.to_owned(),
        })
    }
}

/// Joins an enclosing scope and a simple name into a qualified name.
///
/// The separator is always present, so declarations in a file without a
/// package come out with a leading dot (`.Outer`).
pub(crate) fn qualify(scope: &str, name: &str) -> String {
    format!("{}.{}", scope, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualify_names() {
        assert_eq!(qualify("pkg", "Outer"), "pkg.Outer");
        assert_eq!(qualify("pkg.Outer", "Inner"), "pkg.Outer.Inner");
        assert_eq!(qualify("a.b.c", "D"), "a.b.c.D");
        assert_eq!(qualify("", "Outer"), ".Outer");
    }
}
