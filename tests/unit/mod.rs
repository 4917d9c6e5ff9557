// Unit tests for the core services
// Each file exercises one service through its public API

pub mod periodization_service_test;
pub mod program_parser_test;
