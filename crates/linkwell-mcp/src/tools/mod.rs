//! Tool invocation handlers.
//!
//! One params/result pair per tool; handlers run the async tool suite and
//! return a structured result that includes the rendered text report.

mod inspect;
mod library;
mod manage;
mod shorten;
mod validate;

pub use inspect::{
    handle_expand, handle_metadata, handle_qr, handle_safety, ExpandParams, ExpandResult,
    MetadataParams, MetadataResult, QrParams, QrResult, SafetyParams, SafetyResult,
};
pub use library::{
    handle_create_collection, handle_list_collections, handle_list_urls, handle_search,
    CollectionsResult, CreateCollectionParams, CreateCollectionResult, ListUrlsParams,
    ListUrlsResult, SearchParams, SearchResult,
};
pub use manage::{handle_manage, ManageParams, ManageResult};
pub use shorten::{
    handle_shorten, handle_shorten_batch, ShortenBatchParams, ShortenBatchResult, ShortenParams,
    ShortenResult,
};
pub use validate::{handle_validate, ValidateParams, ValidateResult};
