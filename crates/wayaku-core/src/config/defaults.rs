//! Default value functions used by serde for config deserialization.

pub fn default_debounce_ms() -> u64 {
    100
}

pub fn default_sweep_interval() -> u64 {
    30
}
