//! Integration tests for entigen.toml parsing.

use std::str::FromStr;

use entigen_config::{
    CaseStyle, Error, ExportType, GenerationOptions, LineEnding, StrictMode, Visibility,
};

#[test]
fn test_empty_file_uses_defaults() {
    let options = GenerationOptions::from_str("").expect("empty config is valid");

    assert_eq!(options, GenerationOptions::default());
    assert_eq!(options.naming.file, CaseStyle::Camel);
    assert_eq!(options.naming.entity, CaseStyle::Pascal);
    assert_eq!(options.naming.property, CaseStyle::Camel);
    assert!(options.naming.pluralize);
    assert_eq!(options.style.eol, LineEnding::native());
    assert_eq!(options.style.visibility, Visibility::None);
    assert_eq!(options.style.strict_mode, StrictMode::None);
    assert_eq!(options.style.export, ExportType::Named);
    assert_eq!(options.output.schemas, "schemas");
    assert_eq!(options.output.models, "models");
    assert_eq!(options.output.entities, "entities");
    assert_eq!(options.output.adapters, "typeorm");
    assert!(options.generate.configs);
    assert!(options.generate.nothing_selected());
    assert!(options.connection.is_none());
}

#[test]
fn test_full_config() {
    let options = GenerationOptions::from_str(
        r#"
        [output]
        root = "src"
        entities = "domain/entities"
        templates = "templates"

        [naming]
        file = "param"
        entity = "pascal"
        property = "snake"
        pluralize = false

        [style]
        eol = "CRLF"
        visibility = "public"
        strict_mode = "!"
        export = "default"

        [features]
        lazy = true
        relation_ids = true

        [generate]
        entities = true
        repositories = true
        missing_only = true
        configs = false

        [format]
        command = ["prettier", "--parser", "{parser}"]

        [connection]
        type = "mysql"
        port = 3306
        database = "app"
        "#,
    )
    .expect("config parses");

    assert_eq!(options.output.root.to_str(), Some("src"));
    assert_eq!(options.output.entities, "domain/entities");
    assert_eq!(options.output.models, "models");
    assert_eq!(options.naming.file, CaseStyle::Kebab);
    assert_eq!(options.naming.property, CaseStyle::Snake);
    assert!(!options.naming.pluralize);
    assert_eq!(options.style.eol, LineEnding::Crlf);
    assert_eq!(options.style.visibility.prefix(), "public ");
    assert_eq!(options.style.strict_mode.marker(), "!");
    assert_eq!(options.style.export, ExportType::Default);
    assert!(options.features.lazy);
    assert!(!options.features.active_record);
    assert!(options.generate.entities());
    assert!(!options.generate.models());
    assert!(options.generate.missing_only);
    assert!(!options.generate.configs);
    assert_eq!(
        options.format.command.as_deref(),
        Some(&["prettier".to_string(), "--parser".to_string(), "{parser}".to_string()][..])
    );

    let connection = options.connection.expect("connection table");
    assert_eq!(connection.database_type, "mysql");
    assert_eq!(connection.port, Some(3306));
    assert_eq!(connection.host, "localhost");
}

#[test]
fn test_unknown_case_style_is_fatal() {
    let err = GenerationOptions::from_str("[naming]\nfile = \"screaming\"\n").unwrap_err();

    match *err {
        Error::Parse { span, source, .. } => {
            assert!(source.message().contains("unknown case style 'screaming'"));
            assert!(span.is_some(), "error points at the value");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_unknown_enum_values_are_fatal() {
    for config in [
        "[style]\neol = \"CR\"\n",
        "[style]\nvisibility = \"internal\"\n",
        "[style]\nstrict_mode = \"?!\"\n",
        "[style]\nexport = \"star\"\n",
        "[naming]\nentity = \"upper\"\n",
    ] {
        let err = GenerationOptions::from_str(config).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }), "{config}");
    }
}

#[test]
fn test_unknown_keys_are_rejected() {
    let err = GenerationOptions::from_str("[generate]\ngenEntities = true\n").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));

    let err = GenerationOptions::from_str("[templates]\ndir = \"x\"\n").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_empty_directory_is_rejected() {
    let src = "[output]\nports = \"\"\n";
    let err = GenerationOptions::from_str(src).unwrap_err();

    match *err {
        Error::Validation { message, span, .. } => {
            assert!(message.starts_with("output.ports must not be empty"));
            assert_eq!(span.map(|s| s.offset()), Some(9));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_directory_outside_root_is_rejected() {
    let src = "[output]\nmodels = \"../generated\"\n";
    let err = GenerationOptions::from_str(src).unwrap_err();

    match *err {
        Error::Validation { message, .. } => {
            assert_eq!(message, "output.models must stay inside output.root");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_empty_format_command_is_rejected() {
    let err = GenerationOptions::from_str("[format]\ncommand = []\n").unwrap_err();
    assert_eq!(err.to_string(), "format.command must name a program");
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entigen.toml");
    std::fs::write(&path, "[naming]\npluralize = false\n").unwrap();

    let options = GenerationOptions::from_file(&path).unwrap();
    assert!(!options.naming.pluralize);

    let err = GenerationOptions::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}
