//! Signed, typed prior-knowledge relations between genes.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::{GeneWithData, ProteinSite, SiteRef};
use crate::errors::ModelError;
use crate::sign::Sign;

/// What a relation changes on its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// Source changes the phosphorylation of specific target sites.
    AffectsPhosphoSite,
    /// Source changes the expression of the target.
    AffectsTotalProtein,
    /// Source changes the GTPase activity of the target.
    AffectsGtpaseActivity,
}

impl RelationType {
    pub const ALL: [RelationType; 3] = [
        Self::AffectsPhosphoSite,
        Self::AffectsTotalProtein,
        Self::AffectsGtpaseActivity,
    ];

    pub fn affects_phospho_site(&self) -> bool {
        matches!(self, Self::AffectsPhosphoSite)
    }

    /// Name of this type with the given sign, as written in relation files and reports.
    pub fn name(&self, sign: Sign) -> &'static str {
        let activating = sign != Sign::Negative;
        match (self, activating) {
            (Self::AffectsPhosphoSite, true) => "phosphorylates",
            (Self::AffectsPhosphoSite, false) => "dephosphorylates",
            (Self::AffectsTotalProtein, true) => "upregulates-expression",
            (Self::AffectsTotalProtein, false) => "downregulates-expression",
            (Self::AffectsGtpaseActivity, true) => "activates-gtpase",
            (Self::AffectsGtpaseActivity, false) => "inhibits-gtpase",
        }
    }

    /// Parse a signed relation name back into its type and sign.
    pub fn from_name(name: &str) -> Result<(Self, Sign), ModelError> {
        let parsed = match name {
            "phosphorylates" => (Self::AffectsPhosphoSite, Sign::Positive),
            "dephosphorylates" => (Self::AffectsPhosphoSite, Sign::Negative),
            "upregulates-expression" => (Self::AffectsTotalProtein, Sign::Positive),
            "downregulates-expression" => (Self::AffectsTotalProtein, Sign::Negative),
            "activates-gtpase" => (Self::AffectsGtpaseActivity, Sign::Positive),
            "inhibits-gtpase" => (Self::AffectsGtpaseActivity, Sign::Negative),
            _ => {
                return Err(ModelError::UnknownRelationType {
                    name: name.to_string(),
                })
            }
        };
        Ok(parsed)
    }
}

/// A directed edge from a source gene to a target gene.
///
/// Relations reference the caller's genes and are never modified by the
/// search. Identity is (source, target, type, sign, sites).
#[derive(Debug, Clone)]
pub struct Relation {
    source: Arc<GeneWithData>,
    target: Arc<GeneWithData>,
    rel_type: RelationType,
    sign: Sign,
    /// Target sites, only meaningful for phospho-affecting relations.
    sites: Vec<ProteinSite>,
}

impl Relation {
    pub fn new(
        source: Arc<GeneWithData>,
        target: Arc<GeneWithData>,
        rel_type: RelationType,
        sign: Sign,
    ) -> Result<Self, ModelError> {
        if sign.is_zero() {
            return Err(ModelError::ZeroRelationSign {
                source_gene: source.symbol().to_string(),
                target_gene: target.symbol().to_string(),
            });
        }
        Ok(Self {
            source,
            target,
            rel_type,
            sign,
            sites: Vec::new(),
        })
    }

    /// Build from a signed relation name such as `phosphorylates`.
    pub fn from_name(
        source: Arc<GeneWithData>,
        target: Arc<GeneWithData>,
        name: &str,
    ) -> Result<Self, ModelError> {
        let (rel_type, sign) = RelationType::from_name(name)?;
        Self::new(source, target, rel_type, sign)
    }

    pub fn with_sites(mut self, sites: impl IntoIterator<Item = ProteinSite>) -> Self {
        self.sites = sites.into_iter().collect();
        self.sites.sort();
        self.sites.dedup();
        self
    }

    pub fn source(&self) -> &GeneWithData {
        &self.source
    }

    pub fn target(&self) -> &GeneWithData {
        &self.target
    }

    pub fn source_symbol(&self) -> &str {
        self.source.symbol()
    }

    pub fn target_symbol(&self) -> &str {
        self.target.symbol()
    }

    pub fn rel_type(&self) -> RelationType {
        self.rel_type
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn sites(&self) -> &[ProteinSite] {
        &self.sites
    }

    pub fn type_name(&self) -> &'static str {
        self.rel_type.name(self.sign)
    }

    /// Sites joined by `;`, e.g. `S15;T18`. Empty when there are none.
    pub fn sites_in_string(&self) -> String {
        self.sites
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Whether any observed site on the target gene lies within `proximity`
    /// residues of a site this relation names.
    pub fn target_sites_match(&self, observed: &[SiteRef], proximity: u32) -> bool {
        observed
            .iter()
            .filter(|o| o.gene == self.target_symbol())
            .any(|o| self.sites.iter().any(|s| s.is_near(&o.site, proximity)))
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.source_symbol() == other.source_symbol()
            && self.target_symbol() == other.target_symbol()
            && self.rel_type == other.rel_type
            && self.sign == other.sign
            && self.sites == other.sites
    }
}

impl Eq for Relation {}

impl Hash for Relation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source_symbol().hash(state);
        self.target_symbol().hash(state);
        self.rel_type.hash(state);
        self.sign.hash(state);
        self.sites.hash(state);
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.source_symbol(),
            self.type_name(),
            self.target_symbol()
        )?;
        if !self.sites.is_empty() {
            write!(f, " [{}]", self.sites_in_string())?;
        }
        Ok(())
    }
}
