//! finmetrix — explicit finance metrics library.
//!
//! Hexagonal architecture: domain logic in [`domain`], the kernel seam in
//! [`ports`], concrete kernels in [`adapters`]. Backend selection happens
//! once per process in [`backend`]; the public entry points live in
//! [`returns`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod backend;
pub mod returns;

pub use domain::error::FinmetrixError;
pub use domain::value::RawValue;
pub use returns::{twr, twr_raw};
