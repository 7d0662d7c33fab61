mod format_tests;
pub(crate) mod test_helpers;
