//! Tearable 2D cloth on a Verlet mass-spring lattice.
//!
//! `tatter` simulates a square sheet of point masses joined by sticks. Each
//! rendered frame runs a few substeps of stick relaxation followed by Verlet
//! integration, gravity and a bouncing collision against the viewport. Sticks
//! stretched far past their rest length tear and stay torn.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Iterative relaxation**: Sticks pulled toward rest length, repeated for stiffness
//! - **Tearing**: Overstretched sticks break permanently, indices stay stable
//! - **Pinning & reset**: Fixed nodes, deferred or immediate lattice rebuild
//! - **Observable**: Monitor frames and tears via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! Optional features: `logging` (an `ftlog`-backed observer) and `serde`
//! (serializable configuration).

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod node;
pub mod stick;
pub mod bounds;
pub mod grid;
pub mod solver;
pub mod integrator;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use node::Node;
pub use stick::{Relaxation, Stick, DEFAULT_TEAR_RATIO};
pub use bounds::Bounds;
pub use grid::{Fabric, GridConfig};
pub use solver::relax;
pub use integrator::integrate;
pub use cloth::{Cloth, ClothState};
pub use config::ClothConfig;
pub use observer::{StepObserver, NoOpStepObserver};
#[cfg(feature = "logging")]
pub use observer::LogObserver;
pub use error::ClothError;
