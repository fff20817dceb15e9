//! Experiment data attached to genes.

mod data_type;
mod datum;
mod gene;
mod site;

pub use data_type::DataType;
pub use datum::{DataKind, ExperimentData};
pub use gene::GeneWithData;
pub use site::{ProteinSite, SiteRef};
