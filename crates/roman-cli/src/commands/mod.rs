macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod numeral_ops;
pub mod store_ops;

use std::path::Path;

use roman_core::store::ConversionStore;
use tracing::debug;

/// `--file` if given, otherwise `store.file_name` from settings.
pub fn resolve_store(file: Option<&str>) -> ConversionStore {
    let store = match file {
        Some(path) => ConversionStore::new(Path::new(path)),
        None => ConversionStore::from_settings(),
    };
    debug!(path = %store.path().display(), "resolved conversion store");
    store
}
