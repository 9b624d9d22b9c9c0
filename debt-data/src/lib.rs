pub mod factory;
pub mod loader;

pub use factory::CsvStoreFactory;
pub use loader::{AccountCsvLoader, AccountLoadError};
