// postfmt/src/ui/mod.rs
pub mod censor_summary;
pub mod output_format;
pub mod theme;
