//! Reading descriptor sets and writing translated records to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use api_generator::{Config, Output};
use log::{debug, trace};
use prost::Message;
use prost_types::FileDescriptorSet;

/// Placeholder substituted with each record's qualified name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Reads and decodes a `FileDescriptorSet` from `path`.
pub fn read_descriptor_set(path: &Path) -> Result<FileDescriptorSet> {
    let bytes = fs::read(path)
        .with_context(|| format!("error reading input file {}", path.display()))?;
    FileDescriptorSet::decode(bytes.as_slice()).context("failed to parse file descriptor set")
}

/// Reads `input`, translates it and writes every record through `template`.
///
/// Returns the number of records written.
pub fn run(config: &Config, input: &Path, template: &str) -> Result<usize> {
    let set = read_descriptor_set(input)?;
    let output = config
        .translate(&set)
        .context("failed to build API descriptions")?;
    emit(template, &output).with_context(|| format!("failed to emit output to {}", template))
}

/// Renders the output path of a record: every `{name}` in `template` is
/// replaced by `name`.
pub fn output_path(template: &str, name: &str) -> PathBuf {
    PathBuf::from(template.replace(NAME_PLACEHOLDER, name))
}

/// Writes each type, api and enum record, binary encoded, to its own file.
///
/// Records sharing a name overwrite each other in that order. Extension fields
/// have no qualified name and are not written.
pub fn emit(template: &str, output: &Output) -> Result<usize> {
    let mut written = 0;

    for ty in &output.types {
        let path = output_path(template, &ty.name);
        write_data(&path, &ty.encode_to_vec())
            .with_context(|| format!("could not write type {} to {}", ty.name, path.display()))?;
        written += 1;
    }

    for api in &output.apis {
        let path = output_path(template, &api.name);
        write_data(&path, &api.encode_to_vec())
            .with_context(|| format!("could not write API {} to {}", api.name, path.display()))?;
        written += 1;
    }

    for enum_ty in &output.enums {
        let path = output_path(template, &enum_ty.name);
        write_data(&path, &enum_ty.encode_to_vec()).with_context(|| {
            format!("could not write enum {} to {}", enum_ty.name, path.display())
        })?;
        written += 1;
    }

    debug!("wrote {} records", written);
    Ok(written)
}

/// Writes `contents` to `path`, creating parent directories as needed.
///
/// The file is left untouched when it already holds exactly `contents`.
fn write_data(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("could not create directory at {}", dir.display()))?;
    }

    let previous = fs::read(path);
    if previous
        .map(|previous| previous == contents)
        .unwrap_or(false)
    {
        trace!("unchanged: {:?}", path);
    } else {
        trace!("writing: {:?}", path);
        fs::write(path, contents).with_context(|| format!("could not write {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_placeholder_is_substituted() {
        assert_eq!(
            output_path("out/{name}.pb", "pkg.Outer"),
            PathBuf::from("out/pkg.Outer.pb")
        );
        assert_eq!(
            output_path("{name}/{name}.bin", "a.B"),
            PathBuf::from("a.B/a.B.bin")
        );
        assert_eq!(output_path("fixed.pb", "a.B"), PathBuf::from("fixed.pb"));
    }
}
