//! Human-readable nouns for the feature types the search service returns.

/// Maps a feature `type` to its display noun.
///
/// Keys outside the known set render as an empty string.
#[must_use]
pub fn feature_type_label(feature_type: &str) -> &'static str {
    match feature_type {
        "housenumber" => "numéro",
        "street" => "rue",
        "locality" => "lieu-dit",
        "hamlet" => "hameau",
        "village" => "village",
        "city" => "ville",
        "municipality" => "commune",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchType;

    #[test]
    fn every_filter_option_has_a_label() {
        for t in SearchType::ALL {
            assert!(!feature_type_label(t.as_str()).is_empty(), "{t}");
        }
    }

    #[test]
    fn legacy_types_still_have_labels() {
        assert_eq!(feature_type_label("hamlet"), "hameau");
        assert_eq!(feature_type_label("village"), "village");
        assert_eq!(feature_type_label("city"), "ville");
    }

    #[test]
    fn unknown_type_renders_empty() {
        assert_eq!(feature_type_label("poi"), "");
        assert_eq!(feature_type_label(""), "");
    }
}
