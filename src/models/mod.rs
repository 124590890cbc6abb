pub mod station;

pub use station::{IocStation, StofsStation};
