use super::common::run_validator_suite;
use gcpvalidate::location;

#[test]
fn region_suite() {
    run_validator_suite("region.yaml", location::is_valid_region);
}

#[test]
fn zone_suite() {
    run_validator_suite("zone.yaml", location::is_valid_zone);
}

#[test]
fn location_suite() {
    run_validator_suite("location.yaml", location::is_valid_location);
}
