
mod canonical_tests;
