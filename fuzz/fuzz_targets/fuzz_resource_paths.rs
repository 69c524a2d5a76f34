#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let parent = gcpvalidate::is_valid_project_location_parent(s);
    let model = gcpvalidate::is_valid_vertex_model_resource_name(s);

    // Referential transparency.
    assert_eq!(parent, gcpvalidate::is_valid_project_location_parent(s));
    assert_eq!(model, gcpvalidate::is_valid_vertex_model_resource_name(s));

    // Shape lengths are disjoint: no string satisfies both validators.
    assert!(!(parent && model));

    // Accepted paths always carry the expected segment count.
    if parent {
        assert_eq!(s.split('/').count(), 4);
    }
    if model {
        let n = s.split('/').count();
        assert!(n == 6 || n == 8);
    }
});
