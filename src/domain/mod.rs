//! Pure league domain logic.
//!
//! These modules hold the computation kernels of the application: standings
//! ranking, expired-bid settlement, and role-based permissions. They operate
//! on plain data snapshots and never touch the database directly — the data
//! layer converts entity rows into these types at the boundary, and services
//! persist whatever instructions the computations return.

pub mod role;
pub mod settlement;
pub mod standings;
