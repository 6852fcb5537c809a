//! Concrete text-generation provider implementations

pub mod wavespeed;

pub use wavespeed::WaveSpeedProvider;
