pub mod constants;
pub mod filename;
pub mod longitude;
pub mod progress;
pub mod region;
pub mod timestamp;

pub use constants::*;
pub use filename::{generate_default_csv_filename, generate_default_dump_filename};
pub use longitude::{
    lon180_to_lon360, lon180_to_lon360_all, lon360_to_lon180, lon360_to_lon180_all,
};
pub use progress::ProgressReporter;
pub use region::{get_region, RegionOptions};
pub use timestamp::{resolve_timestamp, ResolvedTimestamp, TimestampInput};
