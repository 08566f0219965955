use std::fs;

use api_generator::Config;
use api_generator_cli::{emit, output_path, read_descriptor_set, run};
use pretty_assertions::assert_eq;
use prost::Message;
use prost_types::{
    Api, DescriptorProto, Enum, EnumDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MethodDescriptorProto, ServiceDescriptorProto, Type,
};

fn descriptor_set() -> FileDescriptorSet {
    FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("pkg/outer.proto".to_string()),
            package: Some("pkg".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("Outer".to_string()),
                nested_type: vec![DescriptorProto {
                    name: Some("Inner".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            enum_type: vec![EnumDescriptorProto {
                name: Some("Status".to_string()),
                ..Default::default()
            }],
            service: vec![ServiceDescriptorProto {
                name: Some("Search".to_string()),
                method: vec![MethodDescriptorProto {
                    name: Some("Find".to_string()),
                    input_type: Some(".pkg.Outer".to_string()),
                    output_type: Some(".pkg.Outer.Inner".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}

#[test]
fn writes_one_file_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("descriptor.pb");
    fs::write(&input, descriptor_set().encode_to_vec()).unwrap();

    let template = format!("{}/out/{{name}}.pb", dir.path().display());
    let written = run(&Config::new(), &input, &template).unwrap();
    assert_eq!(written, 3);

    let outer = fs::read(output_path(&template, "pkg.Outer")).unwrap();
    let outer = Type::decode(outer.as_slice()).unwrap();
    assert_eq!(outer.name, "pkg.Outer");
    assert_eq!(
        outer.source_context.map(|s| s.file_name),
        Some("pkg/outer.proto".to_string())
    );

    let inner = fs::read(output_path(&template, "pkg.Outer.Inner")).unwrap();
    assert_eq!(Type::decode(inner.as_slice()).unwrap().name, "pkg.Outer.Inner");

    let status = fs::read(output_path(&template, "pkg.Status")).unwrap();
    assert_eq!(Enum::decode(status.as_slice()).unwrap().name, "pkg.Status");

    assert!(!output_path(&template, "pkg.Search").exists());
}

#[test]
fn services_are_written_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("descriptor.pb");
    fs::write(&input, descriptor_set().encode_to_vec()).unwrap();

    let template = format!("{}/{{name}}", dir.path().display());
    let mut config = Config::new();
    config.emit_services(true);
    assert_eq!(run(&config, &input, &template).unwrap(), 4);

    let api = fs::read(output_path(&template, "pkg.Search")).unwrap();
    let api = Api::decode(api.as_slice()).unwrap();
    assert_eq!(api.methods.len(), 1);
    assert_eq!(
        api.methods[0].response_type_url,
        "type.googleapis.com/.pkg.Outer.Inner"
    );
}

#[test]
fn rewriting_identical_output_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let template = format!("{}/{{name}}.pb", dir.path().display());
    let output = Config::new().translate(&descriptor_set()).unwrap();

    assert_eq!(emit(&template, &output).unwrap(), 3);
    let path = output_path(&template, "pkg.Outer");
    let modified = fs::metadata(&path).unwrap().modified().unwrap();

    assert_eq!(emit(&template, &output).unwrap(), 3);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
}

#[test]
fn missing_input_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.pb");

    let error = read_descriptor_set(&input).unwrap_err();
    assert!(error.to_string().starts_with("error reading input file"));
    assert!(error.to_string().contains("missing.pb"));
}

#[test]
fn malformed_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage.pb");
    fs::write(&input, [0x0a_u8, 0xff]).unwrap();

    let error = read_descriptor_set(&input).unwrap_err();
    assert_eq!(error.to_string(), "failed to parse file descriptor set");
}

#[test]
fn translation_errors_carry_context() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("descriptor.pb");
    let mut set = descriptor_set();
    set.file[0].syntax = Some("proto7".to_string());
    fs::write(&input, set.encode_to_vec()).unwrap();

    let template = format!("{}/{{name}}", dir.path().display());
    let error = run(&Config::new(), &input, &template).unwrap_err();
    assert_eq!(
        format!("{:#}", error),
        "failed to build API descriptions: \
         could not process proto file pkg/outer.proto: \
         could not determine file syntax: unrecognized syntax proto7"
    );
}
