mod service_tests;
mod valuation_tests;
