//! astrochart: template assembly engine for astrological wheel charts.
//!
//! This crate turns already-computed subject data (celestial point
//! positions, house cusps, a precomputed aspect list, lunar-phase data)
//! plus a render configuration into the flat [`TemplateRecord`] consumed
//! by a downstream SVG template substitution stage. Drawing primitives
//! stay behind the [`render::ChartPainter`] seam.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartTemplateAssembler, RenderConfig, TemplateRecord};
pub use error::{ChartError, ChartResult};
