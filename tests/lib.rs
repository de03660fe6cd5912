//! Workspace member that carries the end-to-end scenarios (see
//! `scenarios.rs`); the library target itself is empty.
