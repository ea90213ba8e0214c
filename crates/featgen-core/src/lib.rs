//! Featgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the featgen
//! feature-module scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           featgen-cli (CLI)             │
//! │     (prompts, flags, config, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, Renderer)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    featgen-adapters (Infrastructure)    │
//! │ (SimpleRenderer, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FeatureName, StructureTree, Catalog)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use featgen_core::{
//!     application::ScaffoldService,
//!     domain::{FeatureName, NameStrictness},
//! };
//!
//! let feature = FeatureName::parse("Wallet", NameStrictness::Strict)?;
//!
//! // Adapters come from `featgen-adapters`.
//! let service = ScaffoldService::new(&FEATURE_TREE, renderer, filesystem);
//! service.scaffold(&feature, "lib/features")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{Filesystem, StructureRenderer},
    };
    pub use crate::domain::{
        Content, ContentCatalog, ContentRule, Entry, FeatureName, Layer, NameStrictness, Node,
        Placement, ProjectStructure, RenderContext, Scope, StructureTree,
    };
    pub use crate::error::{FeatgenError, FeatgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
