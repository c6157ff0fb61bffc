//! placegraph - A generic directed-graph engine
//!
//! This crate provides a graph store with incrementally maintained incidence
//! lists, visitor-driven breadth-first and depth-first traversals, and a
//! Dijkstra shortest-path engine over graphs whose nodes carry 2D placement.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;
