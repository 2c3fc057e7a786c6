//! Data models for meshes, print parameters and estimate results
//!
//! This module provides:
//! - Unindexed triangle meshes in millimeters
//! - Material specifications and the material library
//! - Quality-tier print profiles
//! - Infill fraction with range validation
//! - Labor cost policies
//! - Volume split, weight estimate and cost breakdown records

pub mod estimate;
pub mod infill;
pub mod labor;
pub mod materials;
pub mod mesh;
pub mod profiles;
