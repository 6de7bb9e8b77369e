/*! Integration tests for dataops.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - ops: Tests for the TypeOps contract and the conversion engine
 * - holder: Tests for the DataHolder surface, run against every holder
 * - nested: Tests specific to the in-memory NestedKeyMap
 * - json: Tests specific to JsonData and JSON text I/O
 * - builder: Tests for the fluent section builder
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dataops=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

/// Runs each check once per holder implementation. Expects `holders()` in scope.
macro_rules! for_each_holder {
    ($($name:ident => $check:ident;)*) => {
        $(
            #[test]
            fn $name() {
                let (nested, json) = holders();
                $check(nested);
                $check(json);
            }
        )*
    };
}

mod holder;
