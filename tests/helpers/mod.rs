//! Test helpers and fixtures for sfe integration tests

use sfe::prelude::*;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Catalog declaring the transforms of the MFCC feature chain.
pub const MFCC_CATALOG: &str = r#"
[[transforms]]
name = "Window"
description = "Splits the signal into overlapping windows."
input_format = "RawFormat16"
output_format = "WindowFormatF"

[[transforms.parameters]]
name = "length"
description = "Window length in samples."
default = 512

[[transforms.parameters]]
name = "type"
description = "Window function."
default = "hamming"

[[transforms]]
name = "RDFT"
description = "Real discrete Fourier transform."
input_format = "WindowFormatF"
output_format = "WindowFormatF"
parameters = []

[[transforms]]
name = "SpectralEnergy"
input_format = "WindowFormatF"
output_format = "WindowFormatF"

[[transforms]]
name = "FilterBank"
input_format = "WindowFormatF"
output_format = "WindowFormatF"

[[transforms]]
name = "Log"
input_format = "WindowFormatF"
output_format = "WindowFormatF"

[[transforms]]
name = "Square"
input_format = "WindowFormatF"
output_format = "WindowFormatF"

[[transforms]]
name = "Selector"
input_format = "WindowFormatF"
output_format = "WindowFormatF"

[[transforms.parameters]]
name = "length"
description = "Number of values to keep."
default = 12

[[transforms]]
name = "DCT"
input_format = "WindowFormatF"
output_format = "WindowFormatF"
"#;

/// Steps of the MFCC chain as the engine spells them.
pub const MFCC_STEPS: &[(&str, &str)] = &[
    ("Window", "length=32"),
    ("RDFT", ""),
    ("SpectralEnergy", ""),
    ("FilterBank", ""),
    ("FilterBank", ""),
    ("Log", ""),
    ("Square", ""),
    ("Selector", "length=256"),
    ("DCT", ""),
];

/// Builtin registry extended with the MFCC catalog.
pub fn test_registry() -> TransformRegistry {
    let registry = TransformRegistry::default();
    registry
        .load_toml_str(MFCC_CATALOG)
        .expect("Failed to load MFCC catalog");
    registry
}

/// Log sink for `tracing_subscriber::fmt` that keeps everything written to it.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a debug-level subscriber writing into a fresh [`CapturedLogs`].
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}
