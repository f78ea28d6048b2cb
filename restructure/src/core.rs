// src/core.rs
pub mod build_artifacts;
pub mod cleanup;
pub mod consolidate;
pub mod env_files;
pub mod fs_ops;
pub mod ignore_list;
pub mod paths;
pub mod rewrite;
pub mod runner;
