//! Searching routines shared by the collections.

pub mod linear_search;
