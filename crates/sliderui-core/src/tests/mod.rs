mod slider_tests;
