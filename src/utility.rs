//! Helpers shared across modules.
