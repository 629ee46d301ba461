//! portfolio-core: submission variants, the project factory, and display labels.
//!
//! The factory turns a loosely-typed gallery entry (a kind tag plus two
//! [`Param`]s) into one of the closed [`Submission`] variants. Every variant
//! renders through the [`Showcase`] trait using configurable [`Labels`].

pub mod error;
pub mod factory;
pub mod kind;
pub mod labels;
pub mod param;
pub mod submission;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use factory::ProjectFactory;
pub use kind::ProjectKind;
pub use labels::{LabelOverrides, Labels, Locale, TemplateContext};
pub use param::Param;
pub use submission::{ImageProject, MotionGraphicProject, Showcase, Submission, VideoProject};
