//! Content schemas for the BRICS News studio.
//!
//! Defines the bilingual document model, the slug normalizer, the declarative
//! field descriptors consumed by the host studio, and the save-time validator.

pub mod choices;
pub mod defs;
pub mod error;
pub mod preview;
pub mod schema;
pub mod slug;
pub mod studio;
pub mod validate;

pub use choices::{AnalysisType, Category, Country, ListChoice, Status};
pub use defs::*;
pub use error::{ConfigError, SchemaError};
pub use preview::{Preview, PreviewModel};
pub use schema::{DocumentSchema, FieldDescriptor, FieldValue, SchemaType, schema_types};
pub use slug::{SLUG_MAX_LENGTH, Slug, slugify};
pub use studio::{StudioConfig, load_config};
pub use validate::{FailureKind, ValidationReport, validate_document, validate_value};
