//! Extended property-based tests for oxarb-core
//!
//! This module contains randomized soundness tests for:
//! - Real ball arithmetic checked against exact rational arithmetic
//! - Complex ball arithmetic and its multiplication variants
//! - Batched slice operations and the power-table chain

mod ball_properties;
mod complex_properties;
mod vec_properties;
