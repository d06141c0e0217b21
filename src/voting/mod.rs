pub mod plurality;

pub use plurality::{compute_tally, is_valid_option_id, statistics_entries};
