/// Page size used by symbol search when the caller does not give one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Exchange whose listing seeds an empty catalog
pub const DEFAULT_CATALOG_EXCHANGE: &str = "US";

/// Separator of the multi-symbol quote request
pub const SYMBOL_SEPARATOR: char = ',';

pub const DEFAULT_HISTORY_LIMIT: i64 = 100;
pub const MAX_HISTORY_LIMIT: i64 = 1000;
