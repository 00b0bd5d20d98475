use orderblock_architecture::presentation::wasm_api::registry_map;

#[test]
fn descriptor_registry() {
    let registry = registry_map();
    insta::assert_json_snapshot!("descriptor_registry", registry);
}
