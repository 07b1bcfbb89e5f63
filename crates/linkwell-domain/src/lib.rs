//! Linkwell Domain Layer
//!
//! This crate contains the core types shared by every other layer of the
//! Linkwell URL manager: the persisted URL record and collection, the typed
//! reports returned by the URL tools, and the trait seams the store and tool
//! implementations plug into.
//!
//! ## Key Concepts
//!
//! - **UrlRecord**: one row per shorten event; the same original URL may be
//!   stored many times under different aliases or collections
//! - **Collection**: a named grouping of URL records, unique by name
//! - **Typed reports**: every tool operation returns a struct, not a text
//!   blob; the legacy text rendering (with its `Title:` / `Domain:` marker
//!   lines) lives in each report's `Display` impl as a compatibility adapter
//! - **Trait seams**: `UrlStore` for persistence, `UrlToolkit` for the tool
//!   operations, so the workflow layer can be tested against mocks

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use record::{split_tags, Collection, NewUrl, UrlRecord};
pub use report::{
    BatchItem, BatchReport, CollectionListing, CollectionReport, ExpansionReport, MetadataReport,
    QrReport, RiskLevel, SafetyReport, ShortenReport, UrlListing, ValidationReport,
};
pub use traits::{UrlFilter, UrlStore, UrlToolkit};
