
mod sort_tests;
