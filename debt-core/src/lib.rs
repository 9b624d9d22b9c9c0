pub mod calculations;
pub mod lookup;
pub mod models;
pub mod store;
pub mod validation;

pub use calculations::{QuoteEngine, QuoteError, compute_quote, discount_rate_for};
pub use lookup::{LookupError, find_account};
pub use models::*;
pub use store::{AccountRepository, RepositoryError};
pub use validation::{IdentifierError, is_valid_primary_id, is_valid_secondary_id};
