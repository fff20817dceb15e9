/// Errors raised while building data or relation records.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("relation {source_gene} -> {target_gene} has no sign; relations must activate or inhibit")]
    ZeroRelationSign {
        source_gene: String,
        target_gene: String,
    },

    #[error("unknown relation type: {name}")]
    UnknownRelationType { name: String },

    #[error("gene symbol must not be empty")]
    EmptyGeneSymbol,

    #[error("datum {id} belongs to {datum_gene}, not {gene}")]
    ForeignDatum {
        id: String,
        datum_gene: String,
        gene: String,
    },
}
