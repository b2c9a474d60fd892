//! # ecb-rates
//!
//! Exports the European Central Bank's daily foreign-exchange reference
//! rates to CSV. One run performs a single linear pipeline: fetch the
//! eurofxref XML feed, extract the currency-pair rates (seeded with the
//! EUR/EUR identity record), and write them out as `forex,value,date` rows.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ecb_rates::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let payload = FeedClient::new()?.fetch_daily()?;
//!     let rates = extract_rates(&payload)?;
//!     export_to_csv(&rates, &default_output_path())?;
//!     Ok(())
//! }
//! ```
//!
//! The output is overwritten on every run; a failed run leaves at most a
//! truncated file and is safe to rerun.

pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod rates;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::error::{EcbRatesError, Result};
    pub use crate::export::{default_output_path, export_to_csv};
    pub use crate::extract::extract_rates;
    pub use crate::fetch::{FeedClient, ECB_DAILY_URL};
    pub use crate::rates::{RateRecord, BASE_CURRENCY};
}
