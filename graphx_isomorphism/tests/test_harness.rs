#![allow(dead_code)]

use std::sync::Once;

use graphx_common::TestCase;
use graphx_isomorphism::enumerate_all;

static INIT: Once = Once::new();

/// Configures logging for the test runner.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Runs one shared case and compares the number of mappings found.
#[track_caller]
pub fn run_case(tc: &TestCase) -> Result<(), Box<dyn std::error::Error>> {
    let mappings = enumerate_all(tc.target, tc.pattern, &tc.config)?;

    if mappings.len() != tc.expected_matches {
        tracing::error!(
            "Test case '{}' failed: expected {} mappings, found {}",
            tc.name,
            tc.expected_matches,
            mappings.len()
        );
        for (i, m) in mappings.iter().enumerate() {
            tracing::error!("Mapping #{}: {:?}", i, m.iter().collect::<Vec<_>>());
        }
        return Err(format!(
            "Test case '{}' failed: expected {} mappings, found {}",
            tc.name,
            tc.expected_matches,
            mappings.len()
        )
        .into());
    }

    Ok(())
}
