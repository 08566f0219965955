use prost_types::{Enum, EnumValue};

use super::*;

impl FileTranslator<'_> {
    pub(super) fn push_enums(
        &self,
        enum_types: &[EnumDescriptorProto],
    ) -> Result<Vec<Enum>, Error> {
        self.resolve_enums(self.package, enum_types)
    }

    pub(super) fn resolve_enums(
        &self,
        scope: &str,
        enum_types: &[EnumDescriptorProto],
    ) -> Result<Vec<Enum>, Error> {
        enum_types
            .iter()
            .map(|desc| {
                self.resolve_enum(scope, desc)
                    .map_err(|error| error.within(Scope::Enum(desc.name().to_owned())))
            })
            .collect()
    }

    fn resolve_enum(&self, scope: &str, desc: &EnumDescriptorProto) -> Result<Enum, Error> {
        debug!("  enum: {:?}", desc.name());

        let enumvalue = desc
            .value
            .iter()
            .map(|value| {
                resolve_enum_value(value)
                    .map_err(|error| error.within(Scope::EnumValue(value.name().to_owned())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Enum {
            name: qualify(scope, desc.name()),
            enumvalue,
            options: extract_options(desc.options.as_ref())?,
            source_context: self.source_context(),
            syntax: self.syntax as i32,
            ..Default::default()
        })
    }
}

fn resolve_enum_value(value: &EnumValueDescriptorProto) -> Result<EnumValue, Error> {
    trace!("    value: {:?} = {}", value.name(), value.number());

    Ok(EnumValue {
        name: value.name().to_owned(),
        number: value.number(),
        options: extract_options(value.options.as_ref())?,
    })
}
