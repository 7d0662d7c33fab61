mod binds_tests;
