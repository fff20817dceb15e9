use serde::{Deserialize, Serialize};

/// A residue position on a protein, optionally with the residue letter (S, T, Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProteinSite {
    pub residue: Option<char>,
    pub position: u32,
}

impl ProteinSite {
    pub fn new(residue: char, position: u32) -> Self {
        Self {
            residue: Some(residue),
            position,
        }
    }

    pub fn at(position: u32) -> Self {
        Self {
            residue: None,
            position,
        }
    }

    /// Whether the two positions are at most `proximity` residues apart.
    /// Residue letters are not compared.
    pub fn is_near(&self, other: &ProteinSite, proximity: u32) -> bool {
        self.position.abs_diff(other.position) <= proximity
    }

    /// Parse `S15`, `T308`, or a bare position like `15`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let first = s.chars().next()?;
        if first.is_ascii_digit() {
            return s.parse().ok().map(Self::at);
        }
        let position = s[first.len_utf8()..].parse().ok()?;
        Some(Self::new(first, position))
    }
}

impl std::fmt::Display for ProteinSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.residue {
            Some(r) => write!(f, "{r}{}", self.position),
            None => write!(f, "{}", self.position),
        }
    }
}

/// A site observed in phosphoproteomic data. A peptide may map to more than
/// one gene, so each site names its gene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteRef {
    pub gene: String,
    pub site: ProteinSite,
}

impl SiteRef {
    pub fn new(gene: impl Into<String>, site: ProteinSite) -> Self {
        Self {
            gene: gene.into(),
            site,
        }
    }
}

impl std::fmt::Display for SiteRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.gene, self.site)
    }
}
