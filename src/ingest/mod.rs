//! Data acquisition and intake checks.
//!
//! Two acquisition paths, one validation gate, one raw-data sink:
//!
//! - [`prices`]: daily price history from a public chart API, with a single
//!   one-shot retry on an empty result
//! - [`scrape`]: one HTTP GET + CSS-selected HTML table parsing
//! - [`validate`]: shape / required-column / dtype-presence checks
//! - [`save`]: timestamped raw CSV snapshots
//!
//! Every function here is synchronous and acquires/releases its network and
//! file handles within a single call.

use std::time::Duration;

pub mod prices;
pub mod save;
pub mod scrape;
pub mod validate;

pub use prices::{download_daily_prices, frame_from_chart, ChartResponse};
pub use save::save_raw_csv;
pub use scrape::{scrape_table, table_from_html};
pub use validate::validate_frame;

/// Browser-like user agent sent with every outbound request.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0";

/// Fixed timeout applied to every outbound request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
