//! tiltshine Surface
//!
//! Everything the effect writes to: style properties, diagnostic readouts,
//! user notices, and the computed gradient layer sizes it reads back.

pub mod style;
pub mod diagnostics;
pub mod notice;
pub mod layers;

pub use style::{InlineStyle, StyleSink};
pub use diagnostics::{DiagnosticsSink, NoDiagnostics, Readout, ReadoutPanel};
pub use notice::{Notice, NoticeLog, NoticeSink};
pub use layers::{parse_size_factor, ComputedStyleSource, LayerFactors, PseudoElement, StaticComputedStyle};
