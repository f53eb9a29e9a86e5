// Shared proptest configuration for domain unit tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 64).

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    ProptestConfig {
        // Unit tests live inside the crate; skip regression files.
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}
