//! Simulation tooling tests.
