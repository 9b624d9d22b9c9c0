mod account_record;
mod id_scheme;
mod quote;

pub use account_record::AccountRecord;
pub use id_scheme::IdScheme;
pub use quote::Quote;
