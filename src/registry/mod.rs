/// Registry domain layer: records, area matching, resolution, search.
pub mod errors;
pub mod fetch;
pub mod matcher;
pub mod model;
pub mod report;
pub mod resolve;

pub use errors::RegistryError;
pub use fetch::{fetch_all, fetch_areas};
pub use matcher::MatchOptions;
pub use report::{AreaReport, SearchOptions, SearchOutcome, search};
pub use resolve::AreaSource;
