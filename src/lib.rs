// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Gesture-driven 3D particle swarm engine.
//!
//! Glimmer owns a swarm of colored point particles and morphs their
//! collective arrangement between a floating cloud and a layered tree cone
//! in response to discrete gesture events (`open`, `fist`, `pinch`). Each
//! formation change gives every particle an independently randomized
//! duration and start offset, so the swarm streams into place instead of
//! tweening as one rigid body.
//!
//! # Key entry points
//!
//! - [`engine::SwarmEngine`] - the owned simulation context
//! - [`swarm::ParticleStore`] - the per-particle arrays
//! - [`options::Options`] - runtime configuration (swarm, formation,
//!   transition, motion, palette, camera, keybindings)
//! - [`viewer::Viewer`] - the demo frame loop
//!
//! # Architecture
//!
//! Everything mutates inside one ordered frame step: queued gestures are
//! drained first, the transition controller advances unsettled particles,
//! ambient motion perturbs settled ones, and the orbit camera moves. The
//! renderer, gesture source, and status UI are collaborators behind narrow
//! trait boundaries; the engine itself never draws, detects, or presents.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod status;
pub mod swarm;
pub mod util;
pub mod viewer;

pub use engine::{SwarmCommand, SwarmEngine};
pub use error::GlimmerError;
pub use input::{Gesture, GestureSimulator};
pub use options::Options;
pub use render::{FrameData, LogRenderer, SwarmRenderer};
pub use status::{Severity, StatusSink};
pub use swarm::{Formation, ParticleStore};
pub use viewer::Viewer;
