//! OpenAPI → TypeScript declaration generator.
//!
//! Reads the document the API serves on `/api-json` (or a file exported with
//! `export-openapi`) and writes `paths`, `components` and `operations`
//! declarations for typed frontend clients.

pub mod error;
pub mod source;
pub mod typescript;

pub use error::{TypegenError, TypegenResult};
pub use source::Source;
pub use typescript::{TypeScriptGenerator, generate};
