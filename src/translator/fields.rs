use log::trace;
use prost_types::field::{Cardinality, Kind};
use prost_types::{Field, FieldDescriptorProto};

use crate::options::extract_options;
use crate::type_url::type_url;
use crate::Error;

/// Translates a single field (or extension) descriptor.
///
/// The descriptor's type and label tags share their numbering with
/// `Field.Kind` and `Field.Cardinality`, so they are copied over unchanged.
pub(crate) fn translate_field(field: &FieldDescriptorProto) -> Result<Field, Error> {
    trace!("    field: {:?} = {}", field.name(), field.number());

    let kind = field.r#type.unwrap_or(Kind::TypeUnknown as i32);
    let cardinality = field.label.unwrap_or(Cardinality::Unknown as i32);

    let type_url = field
        .type_name
        .as_deref()
        .map(type_url)
        .unwrap_or_default();

    // Type.oneofs is referenced 1-based; zero means no oneof. Out-of-range
    // indices from a decoded descriptor wrap rather than abort.
    let oneof_index = field
        .oneof_index
        .map_or(0, |index| index.wrapping_add(1));

    let packed = field
        .options
        .as_ref()
        .and_then(|options| options.packed)
        .unwrap_or(false);

    let options = extract_options(field.options.as_ref())?;

    Ok(Field {
        kind,
        cardinality,
        number: field.number(),
        name: field.name().to_owned(),
        type_url,
        oneof_index,
        packed,
        options,
        json_name: field.json_name().to_owned(),
        default_value: field.default_value().to_owned(),
    })
}
