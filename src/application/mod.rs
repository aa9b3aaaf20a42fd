/// Application layer: use cases and the services they share
pub mod services;
pub mod use_cases;
