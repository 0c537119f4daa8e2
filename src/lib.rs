//! # Vellum - Invoice Document Rendering Engine
//!
//! Vellum turns an invoice record and a template id into a fully resolved
//! document: every field defaulted, every total computed, every optional
//! section decided. It provides:
//!
//! - **One pipeline, many templates**: 19 industry templates described as
//!   data, rendered by the same code
//! - **Exact money**: decimal arithmetic with half-up rounding at every step
//! - **Predictable defaults**: explicit value, then template default, then
//!   engine default
//! - **Surfaces**: a CLI and an HTTP API over the same [`Engine`]
//!
//! ## Quick Start
//!
//! ```
//! use vellum::Engine;
//! use vellum::model::InvoiceRecord;
//!
//! let engine = Engine::builtin()?;
//! let record: InvoiceRecord = serde_json::from_str(r#"{
//!     "client": {"name": "Jordan Lee"},
//!     "items": [{"description": "Dinner service", "quantity": 50, "rate": 45}],
//!     "taxRate": 8.5
//! }"#)?;
//!
//! let doc = engine.render(&record, "hospitality")?;
//! assert_eq!(doc.table.totals.figures.total.to_string(), "2880.68");
//! assert_eq!(doc.parties.to.label, "Guest Information");
//!
//! # Ok::<(), vellum::error::VellumError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Input record (company, client, items, style, toggles) |
//! | [`defaults`] | Default resolution and date derivation |
//! | [`style`] | Style axis mappings and style resolution |
//! | [`money`] | Line amounts, totals and money formatting |
//! | [`sections`] | Optional section composition |
//! | [`template`] | Template descriptors, catalog and registry |
//! | [`render`] | The [`Engine`] and document assembly |
//! | [`document`] | Output document tree |
//! | [`suggest`] | Prefills from saved records |
//! | [`config`] | Engine-wide defaults |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod config;
pub mod defaults;
pub mod document;
pub mod error;
pub mod model;
pub mod money;
pub mod render;
pub mod sections;
pub mod server;
pub mod style;
pub mod suggest;
pub mod template;

// Re-exports for convenience
pub use config::EngineDefaults;
pub use document::ResolvedDocument;
pub use error::VellumError;
pub use model::InvoiceRecord;
pub use render::Engine;
