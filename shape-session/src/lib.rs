//! Editing-session glue.
//!
//! [`Session`] owns one editable shape: the committed source mesh, the
//! selected transform mode, the derived preview, the undo history and
//! the goal comparator. Each call to [`Session::tick`] performs the
//! per-frame work the puzzle needs: regenerate the preview when the
//! source or mode changed, and surface any finished goal comparison.
//!
//! Everything the session touches is injected at construction. It never
//! looks up scene state on its own, which is what keeps it testable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod detect;
mod error;
mod session;

pub use detect::ChangeDetector;
pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionParams, MIN_COLLIDER_HEIGHT};
