//! Reactor-gen is an interactive generator for ExtReact + React applications.
//! It collects project metadata through a fixed sequence of prompts, copies a
//! boilerplate tree into the destination and rewrites the few files that
//! carry project-specific values.

/// Question definitions, answer collection and the collected answer record
pub mod answers;

/// Command-line interface module for the reactor-gen application
pub mod cli;

/// Error types and handling for the reactor-gen application
pub mod error;

/// Exclusion patterns for boilerplate subtrees
/// Keeps build/ and node_modules/ out of generated projects
pub mod ignore;

/// Dependency installation step
pub mod install;

/// Destination package manifest synthesis
pub mod manifest;

/// Boilerplate materialization and scaffolding orchestration
/// Combines all components to generate the final project tree
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Placeholder substitution in copied boilerplate files
pub mod rewrite;
