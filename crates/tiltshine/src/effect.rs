//! Shine Effect
//!
//! One orientation event: readouts, mapping, style writes.

use shine_mapper::{
    format_readout, format_value, Axis, Channel, MapError, Mapper, MapperConfig, OrientationSample,
    StaleOutputPolicy, Unit, VisualOutput,
};
use shine_surface::{ComputedStyleSource, DiagnosticsSink, LayerFactors, Readout, StyleSink};

const RAW_AXES: [Axis; 3] = [Axis::Alpha, Axis::Beta, Axis::Gamma];

/// Use the host's declared gradient layer sizes for the horizontal factor.
///
/// Layers the host can't report keep the factor already in `config`.
pub fn with_layer_sizes(mut config: MapperConfig, source: &dyn ComputedStyleSource) -> MapperConfig {
    let current = config.gradient_size.x;
    let fallback = LayerFactors {
        before: current,
        after: current,
    };
    config.gradient_size.x = LayerFactors::from_computed_style_or(source, fallback).average();
    config
}

/// Sample handler bound to a surface
pub struct ShineEffect<S, D> {
    mapper: Mapper,
    style: S,
    diagnostics: D,
}

impl<S: StyleSink, D: DiagnosticsSink> ShineEffect<S, D> {
    pub fn new(mapper: Mapper, style: S, diagnostics: D) -> Self {
        Self {
            mapper,
            style,
            diagnostics,
        }
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// Handle one sample to completion.
    ///
    /// An incomplete sample marks every readout unavailable and leaves the
    /// style untouched unless the config asks for a reset.
    pub fn handle_sample(&mut self, sample: &OrientationSample) -> Result<VisualOutput, MapError> {
        match self.mapper.map(sample) {
            Ok(output) => {
                for axis in RAW_AXES {
                    match sample.axis(axis) {
                        Some(angle) => self
                            .diagnostics
                            .show(Readout::Raw(axis), &format_readout(angle, 1, Unit::Bare)),
                        None => self.diagnostics.mark_unavailable(Readout::Raw(axis)),
                    }
                }
                for (channel, value) in output.iter() {
                    self.style
                        .set_property(channel, &format_value(value, channel.unit()));
                    self.diagnostics.show(
                        Readout::Computed(channel),
                        &format_readout(value, 1, channel.unit()),
                    );
                }
                Ok(output)
            }
            Err(err) => {
                tracing::debug!(%err, "Skipping orientation sample");
                for readout in Readout::ALL {
                    self.diagnostics.mark_unavailable(readout);
                }
                if self.mapper.config().stale_output == StaleOutputPolicy::Reset {
                    for channel in Channel::ALL {
                        self.style.remove_property(channel);
                    }
                }
                Err(err)
            }
        }
    }
}
