//! Globedock - embeds a built globe dashboard into a host page
//!
//! Globedock chooses between a live front-end dev server and a pre-built
//! static bundle, then produces a single renderable document for the
//! host surface: a reference-mode iframe for the dev server, or a
//! self-contained document with the bundle's hashed CSS/JS inlined.
//! When neither is available it produces actionable instructions
//! instead of a blank page.

pub mod assets;
pub mod config;
pub mod embed;
pub mod error;
pub mod probe;
pub mod render;
pub mod ui;

// Re-exports for convenience
pub use assets::{locate_bundle, resolve_pattern, AssetPattern, BundleArtifacts};
pub use config::{Config, ConfigWarning};
pub use embed::{inline_document, reference_document, srcdoc_document, EmbedOptions};
pub use error::{GlobedockError, GlobedockResult};
pub use probe::{AvailabilityCheck, Endpoint, TcpProbe};
pub use render::{render, Diagnostic, DiagnosticKind, RenderConfig, Rendered};
