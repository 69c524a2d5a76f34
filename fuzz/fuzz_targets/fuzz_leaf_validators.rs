#![no_main]

use libfuzzer_sys::fuzz_target;

// Leaf validators must never panic and must be referentially transparent,
// whatever bytes the fuzzer throws at them.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let leaves: &[fn(&str) -> bool] = &[
        gcpvalidate::is_valid_project_id,
        gcpvalidate::is_valid_project_name,
        gcpvalidate::is_valid_region,
        gcpvalidate::is_valid_zone,
        gcpvalidate::is_valid_location,
        gcpvalidate::is_valid_bucket_name,
        gcpvalidate::is_valid_vertex_model_name,
        gcpvalidate::is_valid_vertex_endpoint_name,
    ];

    for validator in leaves {
        assert_eq!(validator(s), validator(s));
    }

    // Regions and zones are locations by definition.
    if gcpvalidate::is_valid_region(s) || gcpvalidate::is_valid_zone(s) {
        assert!(gcpvalidate::is_valid_location(s));
    }
});
