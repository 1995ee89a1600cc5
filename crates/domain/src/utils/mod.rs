//! Serialization helpers shared by the record types

pub mod timestamps;
