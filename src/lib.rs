//! Chained ball-in-square animation.
//!
//! A row of colored motifs animate one at a time. Each activation plays the
//! current motif through a full cycle and hands off to its neighbor; at the
//! ends of the chain the traversal reverses.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod models;
pub mod render;
pub mod services;
pub mod views;
