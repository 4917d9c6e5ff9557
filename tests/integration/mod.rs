// Integration tests spanning parser, generator and projector

pub mod pipeline_test;
