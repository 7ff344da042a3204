use super::model::{CompanyProfile, UNVERIFIED_MARKER};

/// Maximum number of keywords rebuilt from product features.
const MAX_FALLBACK_KEYWORDS: usize = 5;

/// Keyword used when nothing usable can be derived from the profile.
const DEFAULT_KEYWORD: &str = "technology";

/// Derives industry keywords from a company profile.
///
/// Keywords the model flagged as unverified are discarded. When none
/// survive, keywords are rebuilt from product feature tokens longer than
/// three characters. The result is never empty.
pub fn derive_keywords(profile: &CompanyProfile) -> Vec<String> {
    let verified: Vec<String> = profile
        .industry_keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty() && !k.to_lowercase().contains(UNVERIFIED_MARKER))
        .map(|k| k.to_string())
        .collect();

    if !verified.is_empty() {
        return verified;
    }

    // Fallback: token mining over product features, first occurrence wins
    let mut tokens: Vec<String> = Vec::new();
    for feature in &profile.product_core_features {
        for token in feature.to_lowercase().split_whitespace() {
            if token.chars().count() > 3 && !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
    }
    tokens.truncate(MAX_FALLBACK_KEYWORDS);

    if tokens.is_empty() {
        return vec![DEFAULT_KEYWORD.to_string()];
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile_with(keywords: Vec<&str>, features: Vec<&str>) -> CompanyProfile {
        CompanyProfile {
            industry_keywords: keywords.into_iter().map(String::from).collect(),
            product_core_features: features.into_iter().map(String::from).collect(),
            ..CompanyProfile::default()
        }
    }

    #[test]
    fn should_keep_verified_keywords_untouched() {
        let profile = profile_with(vec!["fintech", "payments"], vec![]);

        assert_eq!(derive_keywords(&profile), vec!["fintech", "payments"]);
    }

    #[test]
    fn should_discard_unverified_keywords() {
        let profile = profile_with(
            vec!["fintech", "unverified", "market size unverified"],
            vec![],
        );

        assert_eq!(derive_keywords(&profile), vec!["fintech"]);
    }

    #[test]
    fn should_fall_back_to_feature_tokens_when_no_keyword_survives() {
        let profile = profile_with(
            vec!["Unverified"],
            vec!["Realtime payment routing", "payment fraud detection"],
        );

        let keywords = derive_keywords(&profile);

        assert_eq!(
            keywords,
            vec!["realtime", "payment", "routing", "fraud", "detection"]
        );
    }

    #[test]
    fn should_cap_fallback_keywords_at_five() {
        let profile = profile_with(
            vec![],
            vec!["alpha bravo charlie delta echo foxtrot golf hotel"],
        );

        assert_eq!(derive_keywords(&profile).len(), 5);
    }

    #[test]
    fn should_skip_short_tokens_in_fallback() {
        let profile = profile_with(vec![], vec!["AI b2b SaaS for fleets"]);

        assert_eq!(derive_keywords(&profile), vec!["saas", "fleets"]);
    }

    #[test]
    fn should_default_when_profile_gives_nothing() {
        let profile = profile_with(vec![], vec!["an ai app"]);

        assert_eq!(derive_keywords(&profile), vec!["technology"]);
    }

    proptest! {
        #[test]
        fn derived_keywords_are_never_empty(
            keywords in proptest::collection::vec(".*", 0..6),
            features in proptest::collection::vec(".*", 0..6),
        ) {
            let profile = CompanyProfile {
                industry_keywords: keywords,
                product_core_features: features,
                ..CompanyProfile::default()
            };

            prop_assert!(!derive_keywords(&profile).is_empty());
        }
    }
}
