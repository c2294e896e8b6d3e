//! # lms-core
//!
//! Core types for the LMS items service.
//!
//! This crate provides the types shared across all LMS crates:
//! - The flat `StoredItem` row and the `NewItem` insert payload
//! - The typed domain hierarchy (`Step`, `Task`, `Lab`, `Course`) and the
//!   closed `Item` sum type over them
//! - The `ItemType` discriminator
//! - The mapper that assembles a stored row and its children into an `Item`
//! - Validation and mapping error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod mapper;
pub mod validation;
