use std::path::PathBuf;

/// Structure of the `testdata/*.yaml` fixture files.
#[derive(Debug, serde::Deserialize)]
pub struct FixtureSet {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

pub fn load_fixtures(name: &str) -> FixtureSet {
    let path = fixture_dir().join(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture file {:?}: {}", path, e));
    let set: FixtureSet = serde_saphyr::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture file {:?}: {}", path, e));

    // A suite with an empty side proves nothing.
    assert!(!set.valid.is_empty(), "fixture {} has no valid cases", name);
    assert!(
        !set.invalid.is_empty(),
        "fixture {} has no invalid cases",
        name
    );
    set
}

/// Runs a validator against a named fixture set: every `valid` entry must be
/// accepted and every `invalid` entry rejected.
pub fn run_validator_suite(fixture: &str, validator: fn(&str) -> bool) {
    let set = load_fixtures(fixture);

    for case in &set.valid {
        assert!(
            validator(case),
            "expected {:?} to be valid ({})",
            case,
            fixture
        );
    }
    for case in &set.invalid {
        assert!(
            !validator(case),
            "expected {:?} to be invalid ({})",
            case,
            fixture
        );
    }
}
