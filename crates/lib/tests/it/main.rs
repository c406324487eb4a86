/*! Integration tests for Genery.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - record: Tests for the Record container (access, lookup, flatten, update, aggregation)
 * - containers: Tests for the free container functions
 * - text: Tests for transliteration, cleanup, URLs and truncation
 * - calcs: Tests for rescaling
 * - datetime: Tests for timestamps, interval rounding and durations
 * - cmd: Tests for running commands and temporary files
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("genery=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod calcs;
mod cmd;
mod containers;
mod datetime;
mod helpers;
mod record;
