use prost_types::Type;

use super::*;

impl FileTranslator<'_> {
    pub(super) fn push_messages(&self, message_types: &[DescriptorProto]) -> Result<Output, Error> {
        let mut output = Output::default();
        for message in message_types {
            let translated = self
                .resolve_message(self.package, message)
                .map_err(|error| error.within(Scope::Message(message.name().to_owned())))?;
            output.extend(translated);
        }
        Ok(output)
    }

    /// Translates `message` and, recursively, every message nested in it.
    ///
    /// The returned types are in pre-order: the message itself comes first,
    /// followed by each nested message and its own descendants.
    fn resolve_message(&self, scope: &str, message: &DescriptorProto) -> Result<Output, Error> {
        debug!("  message: {:?}", message.name());

        let name = qualify(scope, message.name());

        let fields = message
            .field
            .iter()
            .map(|field| {
                translate_field(field)
                    .map_err(|error| error.within(Scope::Field(field.name().to_owned())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let oneofs = message
            .oneof_decl
            .iter()
            .map(|oneof| oneof.name().to_owned())
            .collect();

        let options = extract_options(message.options.as_ref())?;

        let mut output = Output::default();
        output.types.push(Type {
            name: name.clone(),
            fields,
            oneofs,
            options,
            source_context: self.source_context(),
            syntax: self.syntax as i32,
            ..Default::default()
        });

        if self.config.nested_enums {
            output.enums.extend(self.resolve_enums(&name, &message.enum_type)?);
        }

        for nested in &message.nested_type {
            let translated = self
                .resolve_message(&name, nested)
                .map_err(|error| error.within(Scope::NestedMessage(nested.name().to_owned())))?;
            output.extend(translated);
        }

        Ok(output)
    }
}
