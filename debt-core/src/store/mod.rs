pub mod factory;
pub mod memory;
pub mod repository;

pub use factory::{AccountStoreFactory, MemoryStoreFactory, StoreConfig, StoreRegistry};
pub use memory::{InMemoryAccountRepository, sample_accounts};
pub use repository::{AccountRepository, RepositoryError};
