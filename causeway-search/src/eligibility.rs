//! Which data may stand as evidence on each side of a relation.
//!
//! These rules only look at data types, site annotations, and effects. They
//! never evaluate whether values changed.

use std::sync::Arc;

use causeway_core::{DataType, ExperimentData, GeneWithData, Relation, RelationType, SearchConfig};

/// Data on the target gene whose change the relation could explain.
pub fn explainable_target_data(config: &SearchConfig, rel: &Relation) -> Vec<Arc<ExperimentData>> {
    match rel.rel_type() {
        RelationType::AffectsPhosphoSite => rel
            .target()
            .data(DataType::PhosphoProtein)
            .iter()
            .filter(|d| is_phospho_target_compatible(config, rel, d))
            .cloned()
            .collect(),
        RelationType::AffectsTotalProtein => {
            rel.target().data_of(config.expression_evidence_types())
        }
        RelationType::AffectsGtpaseActivity => rel.target().data(DataType::Activity).to_vec(),
    }
}

/// Data on the source gene that could drive the relation.
pub fn affecting_source_data(config: &SearchConfig, rel: &Relation) -> Vec<Arc<ExperimentData>> {
    match rel.rel_type() {
        RelationType::AffectsPhosphoSite | RelationType::AffectsGtpaseActivity => {
            general_activation_evidence(config, rel.source())
        }
        RelationType::AffectsTotalProtein => {
            if config.mandate_activity_data_upstream_of_expression {
                rel.source().data(DataType::Activity).to_vec()
            } else {
                general_activation_evidence(config, rel.source())
            }
        }
    }
}

/// Whether a phosphoprotein datum carries a site the relation targets.
/// Always true when site matching is not forced.
pub fn is_phospho_target_compatible(
    config: &SearchConfig,
    rel: &Relation,
    target: &ExperimentData,
) -> bool {
    !config.force_site_matching
        || rel.target_sites_match(target.sites(), config.site_proximity_threshold)
}

/// Data on a gene that may indicate a change of its activity.
pub fn general_activation_evidence(
    config: &SearchConfig,
    gene: &GeneWithData,
) -> Vec<Arc<ExperimentData>> {
    let types: Vec<DataType> = config.general_activity_indicators.iter().copied().collect();
    let mut data = gene.data_of(&types);

    if config.use_strongest_proteomics_data_for_activity {
        remove_shadowed_proteomic_data(&mut data);
    }
    data
}

/// Keep only the total protein datum with a known effect and the largest
/// absolute change; drop every other total protein datum. Ties go to the
/// first one. Other data types are untouched.
pub fn remove_shadowed_proteomic_data(data: &mut Vec<Arc<ExperimentData>>) {
    if data.len() <= 1 {
        return;
    }

    let strongest = data
        .iter()
        .filter(|d| d.is_total_protein() && !d.effect.is_zero())
        .fold(None::<&Arc<ExperimentData>>, |best, d| match best {
            Some(b) if b.change_value.abs() >= d.change_value.abs() => Some(b),
            _ => Some(d),
        })
        .map(|d| d.id.clone());

    if let Some(keep) = strongest {
        data.retain(|d| !d.is_total_protein() || d.id == keep);
    }
}
