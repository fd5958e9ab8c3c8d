//! Execution plan compilation for runglob
//!
//! This crate turns script-name patterns and a manifest's script table into
//! a [`TaskGraph`]: groups of phases of parallel steps, where each step is a
//! script bracketed by its optional `pre` and `post` scripts.
//!
//! ```text
//! graph.groups[g]                      in caller order
//!   .phases[p]                         strictly one after another
//!     .steps[s]                        may run concurrently
//!       .pre / .main / .post           one after another
//! ```

pub mod builder;
pub mod graph;
pub mod normalize;
pub mod pattern;
pub mod request;
pub mod resolver;
pub mod script;

pub use builder::*;
pub use graph::*;
pub use normalize::*;
pub use pattern::*;
pub use request::*;
pub use resolver::*;
pub use script::*;
