//! TOML catalog files and feature chains

use crate::helpers::{test_registry, MFCC_CATALOG, MFCC_STEPS};
use sfe::prelude::*;
use sfe::{CatalogConfig, CatalogError};
use std::io::Write;

#[test]
fn test_load_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MFCC_CATALOG.as_bytes()).unwrap();

    let registry = TransformRegistry::new();
    let names = registry.load_file(file.path()).unwrap();
    assert_eq!(names.first().map(String::as_str), Some("Window"));
    assert_eq!(names.len(), 8);
    assert_eq!(registry.len(), 8);

    let window = registry.get("Window").unwrap();
    assert_eq!(window.input_format(), "RawFormat16");
    assert!(window.supports("type"));
}

#[test]
fn test_invalid_catalog_registers_nothing() {
    let registry = TransformRegistry::new();
    let text = r#"
        [[transforms]]
        name = "Log"
        [[transforms]]
        name = "Log"
    "#;
    assert!(matches!(
        registry.load_toml_str(text),
        Err(CatalogError::InvalidConfig(_))
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = TransformRegistry::new().load_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn test_catalog_schema_presence() {
    let config = CatalogConfig::from_toml_str(MFCC_CATALOG).unwrap();
    let descriptors = config.into_descriptors();
    let rdft = descriptors.iter().find(|t| t.name() == "RDFT").unwrap();
    let log = descriptors.iter().find(|t| t.name() == "Log").unwrap();
    assert!(rdft.supported_parameters().is_some());
    assert!(log.supported_parameters().is_none());
}

#[test]
fn test_mfcc_chain() {
    let registry = test_registry();
    let chain = registry.chain("MFCC", MFCC_STEPS).unwrap();

    assert_eq!(chain.len(), MFCC_STEPS.len());
    assert_eq!(
        chain.to_string(),
        "MFCC: Window(length=32) -> RDFT -> SpectralEnergy -> FilterBank -> FilterBank -> \
         Log -> Square -> Selector(length=256) -> DCT"
    );
    assert_eq!(
        chain.transforms()[0].parameter("length"),
        Some(&ParameterValue::Int(32))
    );
}

#[test]
fn test_chain_rejects_undeclared_parameter() {
    let registry = test_registry();
    let result = registry.chain("Broken", &[("Window", "length=32"), ("RDFT", "size=512")]);
    match result {
        Err(CatalogError::UnknownParameter {
            transform,
            parameter,
        }) => {
            assert_eq!(transform, "RDFT");
            assert_eq!(parameter, "size");
        }
        other => panic!("Expected UnknownParameter, got {other:?}"),
    }
}
