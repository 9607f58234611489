//! Single integration test target; the modules below share the `common`
//! harness and a real test database (`TEST_DATABASE_URL`).

mod common;

mod usuario_tests;
