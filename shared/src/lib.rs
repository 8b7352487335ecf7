pub mod csv;
pub mod filter;
pub mod mappings;
pub mod period;
pub mod record;
pub mod selection;

pub use csv::parse_csv;
pub use filter::*;
pub use mappings::{DECADES, image_key, region_aliases, regions_for};
pub use period::Period;
pub use record::{Record, RecordSet};
pub use selection::*;
