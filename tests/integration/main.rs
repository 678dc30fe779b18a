//! Integration tests for Policy-Scout

mod scrape_tests;
