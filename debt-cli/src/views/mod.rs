//! Plain-text renderings of a consultation.

mod agreement_letter;
mod quote_table;
mod summary;

pub use agreement_letter::render_agreement_letter;
pub use quote_table::render_quote_table;
pub use summary::{render_schedule_legend, render_summary};
