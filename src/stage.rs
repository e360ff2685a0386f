mod manifest;
mod report;
mod stager;

pub use manifest::Manifest;
pub use report::StageReport;
pub use stager::{StageError, Stager, remove_output};
