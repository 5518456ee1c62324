// tests/property/main.rs

mod split_params;
