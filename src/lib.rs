//! # Quickhull animation
//!
//! A Rust implementation of the Quickhull algorithm for computing convex
//! hulls of 2D point sets, recording an animation frame for every step of
//! the divide-and-conquer recursion.
//!
//! Alongside the hull polygon, [`QuickHull2d`] produces an ordered history
//! of [`AnimationFrame`] snapshots. Each frame captures the dividing lines
//! currently pending in the recursion and the hull segments already settled,
//! so a rendering layer can play the construction back step by step.
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)

#![warn(missing_docs)]

mod frame;
mod hull;

pub use frame::AnimationFrame;
pub use hull::QuickHull2d;
