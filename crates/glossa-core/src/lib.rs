//! Client-side state for the Glossa glossary: filtering, pagination, the
//! term submission form and the shared plumbing (config, endpoints, errors)
//! that the browser and terminal front ends drive.

pub mod auth;
pub mod choice;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod form;
pub mod listing;
pub mod pagination;
pub mod taxonomy;
pub mod text;
