//! DataHolder integration tests
//!
//! Every check here is written once against the `DataHolder` trait and run for
//! both `NestedKeyMap` and `JsonData`.

mod access_tests;
mod conversion_tests;
mod section_tests;
