use super::common::run_validator_suite;
use gcpvalidate::storage;

#[test]
fn bucket_name_suite() {
    run_validator_suite("bucket_name.yaml", storage::is_valid_bucket_name);
}
