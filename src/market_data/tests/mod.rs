pub(crate) mod fixtures;
mod merger_tests;
