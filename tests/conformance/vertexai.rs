use super::common::run_validator_suite;
use gcpvalidate::vertexai;

#[test]
fn vertex_model_name_suite() {
    run_validator_suite("vertex_name.yaml", vertexai::is_valid_vertex_model_name);
}

#[test]
fn vertex_endpoint_name_suite() {
    // Endpoint names share the model-name grammar, so they share its fixtures.
    run_validator_suite("vertex_name.yaml", vertexai::is_valid_vertex_endpoint_name);
}
