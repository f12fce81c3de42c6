pub mod plan_encoding;
