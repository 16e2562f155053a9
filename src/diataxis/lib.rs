//! # Diataxis Architecture
//!
//! Diataxis is a **UI-agnostic documentation registry**. It keeps a tree of
//! Markdown documents — how-tos, tutorials, explanations, decision records,
//! handovers, five-why analyses, notes, projects — consistent with itself:
//! every document's filename is derived from its current first heading, and
//! a generated README lists every document in a delimited section per kind.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                     │
//! │  - Parses arguments, prints messages, owns exit codes      │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands, holds the loaded config      │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - create / update (resync) / init                         │
//! │  - Returns Result<CmdResult>, never prints                 │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Core modules                                              │
//! │  - kind: the closed descriptor table per document kind     │
//! │  - markdown: first-heading title extraction                │
//! │  - config: .diataxis discovery and path resolution         │
//! │  - locate: recursive glob discovery                        │
//! │  - sync: title-driven renames, subdirectory-preserving     │
//! │  - readme: delimited index sections                        │
//! │  - templates: new-document bodies                          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Synchronization Contract
//!
//! A document's title lives in its file, nowhere else. One `update` pass per
//! kind: discover files (recursively, under the configured directory, never
//! crossing out of the repository that owns the `.diataxis` file), rename
//! each file whose name no longer matches its title (keeping it in its
//! subdirectory), re-discover, and rewrite that kind's README section. The
//! pass is idempotent: a second run renames nothing and rewrites the README
//! byte-identically.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for create / update / init
//! - [`kind`]: Document kinds and their naming/formatting rules
//! - [`markdown`]: Title extraction
//! - [`config`]: `.diataxis` configuration
//! - [`locate`]: Document discovery
//! - [`sync`]: Rename synchronization
//! - [`readme`]: README section management
//! - [`templates`]: New-document content
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod kind;
pub mod locate;
pub mod markdown;
pub mod readme;
pub mod sync;
pub mod templates;
