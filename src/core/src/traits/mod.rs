//! Shared traits for role resolution

pub mod attributes;

// Re-export commonly used traits
pub use attributes::AttributeSource;
