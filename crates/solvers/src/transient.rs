//! Fixed-step time integration of a [`DoublePendulum`].
//!
//! # Solvers
//!
//! - [`verlet`]: position Verlet with an Euler-expansion bootstrap
//!
//! [`DoublePendulum`]: pendulum_core::DoublePendulum

pub mod verlet;
