//! Property suites, one module per layer.

mod poly_properties;
mod quotient_properties;
mod ring_properties;
