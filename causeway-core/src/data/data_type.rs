use serde::{Deserialize, Serialize};

/// Kind of measurement a datum carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Total protein abundance.
    Protein,
    /// Protein abundance at one or more phosphosites.
    PhosphoProtein,
    /// Inferred or annotated activity state.
    Activity,
    /// Transcript abundance.
    Rna,
}

impl DataType {
    pub const ALL: [DataType; 4] = [
        Self::Protein,
        Self::PhosphoProtein,
        Self::Activity,
        Self::Rna,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::PhosphoProtein => "phosphoprotein",
            Self::Activity => "activity",
            Self::Rna => "rna",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "protein" => Some(Self::Protein),
            "phosphoprotein" => Some(Self::PhosphoProtein),
            "activity" => Some(Self::Activity),
            "rna" => Some(Self::Rna),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
