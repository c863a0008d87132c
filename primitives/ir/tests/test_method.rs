use atlas_ir::{MethodDescriptor, MethodGroup, Param, ParamType};
use serde_json::json;

fn balance() -> MethodDescriptor {
    MethodDescriptor::new(
        "eth_getBalance",
        "Get balance",
        MethodGroup::Reading,
        "Returns the balance of the account of given address.",
        vec![
            Param::required(ParamType::Address, "account", "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
            Param::required(ParamType::BlockSelector, "block", "latest"),
        ],
    )
}

#[test]
fn descriptor_serializes_without_behaviour() {
    let method = balance();
    let value = serde_json::to_value(&method).expect("descriptor should serialize");
    assert_eq!(value["id"], "eth_getBalance");
    assert_eq!(value["group"], "reading");
    assert_eq!(value["params"][1]["type"], "blockSelector");

    let back: MethodDescriptor = serde_json::from_value(value).expect("descriptor should deserialize");
    assert_eq!(back, method);
}

#[test]
fn initial_values_follow_param_order() {
    let method = balance();
    assert_eq!(
        method.initial_values(),
        vec![json!("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"), json!("latest")]
    );
    assert!(method.param("block").is_some());
    assert!(method.param("missing").is_none());
}

#[test]
fn groups_parse_and_display() {
    for group in MethodGroup::ALL {
        assert_eq!(group.as_str().parse::<MethodGroup>().expect("should parse"), group);
    }
    assert_eq!(MethodGroup::Debug.display_name(), "Debug methods");
    assert_eq!(MethodGroup::Trace.display_name(), "Tracing");
}

#[test]
fn nested_object_serializes_field_map() {
    let filter = Param::object(
        "filter",
        vec![
            Param::optional(ParamType::BlockSelector, "fromBlock"),
            Param::array(ParamType::Address, "fromAddress").with_count(1),
        ],
    )
    .with_description("Trace filter");
    let value = serde_json::to_value(&filter).expect("serialize");
    assert_eq!(value["shape"], "object");
    assert_eq!(value["items"]["fromAddress"]["itemType"], "address");
    assert_eq!(value["items"]["fromAddress"]["count"], 1);
    assert_eq!(filter.description(), Some("Trace filter"));
}
