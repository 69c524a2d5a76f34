use super::common::run_validator_suite;
use gcpvalidate::project;

#[test]
fn project_id_suite() {
    run_validator_suite("project_id.yaml", project::is_valid_project_id);
}

#[test]
fn project_name_suite() {
    run_validator_suite("project_name.yaml", project::is_valid_project_name);
}
