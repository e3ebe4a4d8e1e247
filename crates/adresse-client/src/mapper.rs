use crate::types::{DisplayRecord, FeatureCollection};

/// Flattens a response into display records.
///
/// One record per feature, in service order. Nothing is sorted, filtered or
/// deduplicated.
#[must_use]
pub fn map_results(response: &FeatureCollection) -> Vec<DisplayRecord> {
    response
        .features
        .iter()
        .map(|feature| feature.properties.clone())
        .collect()
}
