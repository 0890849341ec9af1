//! Functional core for hegiphy.
//!
//! Pure domain types and tag-set operations live in [`favorite`], the
//! record-store contract and the favorites repository in [`storage`], and
//! the identity verification contract in [`auth`].

pub mod auth;
pub mod favorite;
pub mod storage;
