//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Fun Entertainment Bot".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
