//! Transform types known without any catalog file.

use sfe_core::{ParameterDescriptor, TransformDescriptor};

/// The builtin transform types, registered by
/// [`TransformRegistry::default`](crate::TransformRegistry::default).
pub fn builtin_transforms() -> Vec<TransformDescriptor> {
    vec![beat(), lpc(), complex_to_real()]
}

fn beat() -> TransformDescriptor {
    TransformDescriptor::builder("Beat")
        .description("Find the tempo of a musical signal.")
        .input_format("ArrayFormatF")
        .output_format("ArrayFormat<FixedArray<2>>")
        .supported_parameters([
            ParameterDescriptor::new("bands", "The number of bands to sum.", 1),
            ParameterDescriptor::new("pulses", "The number of pulses for the convolution.", 3),
            ParameterDescriptor::new("min_bpm", "Minimal number of beats per minute.", 60.0),
            ParameterDescriptor::new("max_bpm", "Maximal number of beats per minute.", 240.0),
            ParameterDescriptor::new(
                "resolution1",
                "The bpm resolution during the first pass.",
                2.0,
            ),
            ParameterDescriptor::new(
                "resolution2",
                "The bpm resolution during the second pass.",
                0.1,
            ),
            ParameterDescriptor::new(
                "peaks",
                "The number of the most significant peaks to record.",
                3,
            ),
            ParameterDescriptor::new("debug", "Dump the resulting energy vectors.", false),
        ])
        .build()
}

fn lpc() -> TransformDescriptor {
    TransformDescriptor::builder("LPC")
        .description(
            "Calculate Linear Prediction Coefficients (LPC) using Levinson-Durbin \
             recursion from autocorrelation coefficients.",
        )
        .input_format("ArrayFormatF")
        .output_format("ArrayFormatF")
        .supported_parameters([ParameterDescriptor::new(
            "error",
            "Include total estimation error",
            false,
        )])
        .build()
}

fn complex_to_real() -> TransformDescriptor {
    TransformDescriptor::builder("ComplexToReal")
        .description("Keep the real part of each complex value.")
        .input_format("WindowFormatF")
        .output_format("WindowFormatF")
        .supported_parameters(Vec::<ParameterDescriptor>::new())
        .build()
}
