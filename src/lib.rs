#![cfg_attr(target_os = "none", no_std)]
#![allow(internal_features)]
#![feature(format_args_nl)]

//! Integer-only reciprocal square root in Q16 fixed point, and an
//! approximate 3D distance built on it.
//!
//! Nothing here touches floating point; the whole thing runs on an RV32I
//! core without an FPU.

#[macro_use]
pub mod debug;

pub mod bits;
pub mod config;
pub mod decimal;
pub mod demo;
pub mod distance;
pub mod emit;
pub mod rsqrt;

pub use distance::{distance3, distance3_checked, Magnitude};
pub use rsqrt::{reciprocal_sqrt_q16, Q16};
