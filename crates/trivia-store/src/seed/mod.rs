//! Seed import system
//!
//! Provides:
//! - Seed Format v0 schema (categories plus questions)
//! - YAML parser with validation
//! - Digest canonicalization
//! - Importer orchestration

pub mod digest;
pub mod format;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format::{SeedCategory, SeedQuestion, SeedV0};
pub use importer::{import_seed, import_seed_path, import_seed_str, SeedReport};
pub use parser::{parse_seed_file, parse_seed_str, parse_seed_str_with_db};
