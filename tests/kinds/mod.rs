//! Kind registry tests through the public API.

pub mod tests_registry;
