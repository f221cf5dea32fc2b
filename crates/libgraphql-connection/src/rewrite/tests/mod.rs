mod schema_rewriter_tests;
