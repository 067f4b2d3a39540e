//! Export of sampled fields to image files.
//!
//! The sampling core never writes files; this module serves the CLI and any
//! caller that wants a quick look at a field.

mod png;

pub use png::{export_heightmap_png, export_normal_map_png, ExportError, PngExportOptions};
