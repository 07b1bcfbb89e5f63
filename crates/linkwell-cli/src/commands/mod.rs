//! Command implementations.

pub mod ask;
pub mod collections;
pub mod expand;
pub mod list;
pub mod qr;
pub mod search;
pub mod shorten;
pub mod validate;

pub use self::ask::execute_ask;
pub use self::collections::execute_collections;
pub use self::expand::execute_expand;
pub use self::list::execute_list;
pub use self::qr::execute_qr;
pub use self::search::execute_search;
pub use self::shorten::execute_shorten;
pub use self::validate::execute_validate;
