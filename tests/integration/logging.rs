//! Debug records emitted while building descriptor signatures

use crate::helpers::with_captured_logs;
use sfe::prelude::*;

#[test]
fn test_description_emits_debug_record() {
    let t = TransformDescriptor::builder("mfcc")
        .parameter("num_coefficients", 13)
        .parameter("window_size", 512)
        .build();

    let (signature, logs) = with_captured_logs(|| t.description());
    assert_eq!(signature, "mfcc(num_coefficients=13, window_size=512)");
    assert!(logs.contains("DEBUG"), "{logs}");
    assert!(
        logs.contains("Constructed transform string: mfcc(num_coefficients=13, window_size=512)"),
        "{logs}"
    );
}

#[test]
fn test_description_without_subscriber() {
    let t = TransformDescriptor::new("fft");
    assert_eq!(t.description(), "fft");
}

#[test]
fn test_replaced_registration_is_logged() {
    let registry = TransformRegistry::new();
    let (_, logs) = with_captured_logs(|| {
        registry.register(TransformDescriptor::new("Log"));
        registry.register(TransformDescriptor::new("Log"));
    });
    assert!(logs.contains("Registered transform: Log"), "{logs}");
    assert!(logs.contains("Replaced transform registration: Log"), "{logs}");
}
