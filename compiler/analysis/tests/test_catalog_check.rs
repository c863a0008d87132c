use atlas_analysis::{CatalogChecker, ParamValidator};
use catalog::{get_defaults, get_method_list};
use ir::{MethodDescriptor, MethodGroup, Param, ParamType, PrimitiveParam};
use serde_json::json;
use types::Chain;

fn checker() -> CatalogChecker {
    CatalogChecker::new(ParamValidator::new().expect("patterns should compile"))
}

fn method(id: &str, params: Vec<Param>) -> MethodDescriptor {
    MethodDescriptor::new(id, id, MethodGroup::Reading, "", params)
}

#[test]
fn shipped_catalog_is_clean_for_every_chain() {
    let checker = checker();
    for chain in Chain::ALL {
        let errors = checker.check(&get_method_list(&get_defaults(Some(chain))));
        assert!(errors.is_empty(), "{}: {:?}", chain, errors);
    }
}

#[test]
fn fails_on_duplicate_method_ids() {
    let errors = checker().check(&[method("eth_chainId", vec![]), method("eth_chainId", vec![])]);
    assert!(errors.iter().any(|e| e.contains("Duplicate method id: eth_chainId")), "{:?}", errors);
}

#[test]
fn fails_on_empty_method_name() {
    let unnamed = MethodDescriptor::new("eth_chainId", " ", MethodGroup::Reading, "", vec![]);
    let errors = checker().check(&[unnamed]);
    assert_eq!(errors, vec!["Method `eth_chainId` has an empty name".to_string()]);
}

#[test]
fn fails_on_duplicate_param_names() {
    let errors = checker().check(&[method(
        "eth_getBalance",
        vec![
            Param::required(ParamType::BlockSelector, "block", "latest"),
            Param::required(ParamType::BlockSelector, "block", "latest"),
        ],
    )]);
    assert!(errors.iter().any(|e| e.contains("duplicate param `block`")), "{:?}", errors);
}

#[test]
fn fails_on_required_without_default() {
    let broken = Param::Primitive(PrimitiveParam {
        kind: ParamType::Address,
        name: "account".into(),
        required: true,
        default: None,
        description: None,
    });
    let errors = checker().check(&[method("eth_getBalance", vec![broken])]);
    assert!(errors.iter().any(|e| e.contains("required without default")), "{:?}", errors);
}

#[test]
fn fails_on_invalid_default() {
    let errors = checker().check(&[method(
        "eth_getBlockByHash",
        vec![Param::required(ParamType::Hash, "block", "0x1234")],
    )]);
    assert!(errors.iter().any(|e| e.contains("is not a valid hash")), "{:?}", errors);

    let errors = checker().check(&[method(
        "trace_block",
        vec![Param::array(ParamType::TraceType, "types").with_items(vec![json!("bogus")])],
    )]);
    assert!(errors.iter().any(|e| e.contains("default items")), "{:?}", errors);
}

#[test]
fn fails_on_nesting_and_empty_objects() {
    let deep = Param::object(
        "outer",
        vec![Param::object("inner", vec![Param::optional(ParamType::Integer, "n")])],
    );
    let errors = checker().check(&[method("x_deep", vec![deep, Param::object("empty", vec![])])]);
    assert!(errors.iter().any(|e| e.contains("nests 3 levels deep")), "{:?}", errors);
    assert!(errors.iter().any(|e| e.contains("object has no fields")), "{:?}", errors);
}
