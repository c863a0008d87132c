use std::collections::HashSet;

use types::{Chain, Language, Provider, Target};

#[test]
fn chain_slug_and_id_are_a_bijection() {
    let slugs: HashSet<_> = Chain::ALL.iter().map(|c| c.as_str()).collect();
    let ids: HashSet<_> = Chain::ALL.iter().map(|c| c.id()).collect();
    assert_eq!(slugs.len(), Chain::ALL.len());
    assert_eq!(ids.len(), Chain::ALL.len());

    for chain in Chain::ALL {
        assert_eq!(Chain::from_id(chain.id()), Some(chain));
        assert_eq!(chain.as_str().parse::<Chain>().expect("slug should parse"), chain);
    }
}

#[test]
fn baseline_chain_is_ethereum() {
    assert_eq!(Chain::BASELINE, Chain::Ethereum);
    assert_eq!(Chain::default(), Chain::BASELINE);
}

#[test]
fn every_chain_has_a_keyless_public_endpoint() {
    for chain in Chain::ALL {
        let keyless = chain.providers().any(|p| !p.requires_credential());
        assert!(keyless, "{} should have at least one public endpoint", chain);
        assert!(chain.default_rpc_url().starts_with("https://"));
    }
}

#[test]
fn credentialed_endpoints_carry_the_placeholder() {
    for chain in Chain::ALL {
        for provider in chain.providers() {
            let url = chain.endpoint(provider).expect("listed provider has an endpoint");
            assert!(!url.contains("{key}"), "template leaked into {}", url);
            if let Some(placeholder) = provider.credential_placeholder() {
                assert!(url.contains(placeholder), "{} should contain {}", url, placeholder);
            }
        }
    }
}

#[test]
fn providers_serialize_to_dataset_keys() {
    let keys: Vec<String> = Provider::ALL
        .iter()
        .map(|p| serde_json::to_value(p).expect("serialize").as_str().unwrap_or_default().to_string())
        .collect();
    assert!(keys.contains(&"publicNode".to_string()));
    assert!(keys.contains(&"quickNode".to_string()));
}

#[test]
fn compatibility_set_has_seven_targets() {
    assert_eq!(Target::ALL.len(), 7);
    let per_language: usize = Language::ALL.iter().map(|l| l.libraries().len()).sum();
    assert_eq!(per_language, Target::ALL.len());
}
