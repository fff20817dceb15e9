//! Built-in graph filters applied to the accepted relations after a run.

mod gene_focus;
mod top_upstream;

pub use gene_focus::GeneFocusFilter;
pub use top_upstream::TopUpstreamFilter;
