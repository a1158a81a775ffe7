//! Port traits for the domain.

pub mod kernel_port;
