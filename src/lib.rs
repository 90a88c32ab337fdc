//! Gridmark - annotation grid core for marking defects on product photos.
//!
//! Holds the grid state, picks a visually distinguishable marker color for
//! each mark from the pixel underneath it, and serializes the marks to CSV.
//! Rendering and input wiring belong to an external UI collaborator.

pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod export;
pub mod grid;
pub mod marker;
pub mod sampler;

pub use catalog::Catalog;
pub use config::{ConfigError, GridConfig};
pub use export::ExportMetadata;
pub use grid::{ActiveCell, AnnotationGrid, CellCoord, ToggleOutcome};
pub use marker::MarkerColorSelector;
pub use sampler::RasterSampler;
