//! Core of a dual-thumb range seek bar.
//!
//! The crate owns everything below the drawing layer: the absolute range and
//! the two normalized thumb positions, the discrete snap list, hit-testing,
//! and the pointer gesture state machine. A host view forwards pointer
//! events to [`engine::RangeSeekBar`], applies the returned
//! [`engine::Action`]s and draws the thumbs at
//! [`engine::RangeSeekBar::thumb_screen_x`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Host-facing [`engine::RangeSeekBar`] facade |
//! | [`model`] | Bounds, normalized positions and value conversions |
//! | [`steps`] | Discrete snap-point generation and nearest lookup |
//! | [`number`] | Numeric kinds and tagged range values |
//! | [`input`] | Pointer event types and the gesture state machine |
//! | [`hit`] | Thumb hit-testing and the overlap tie-break |
//! | [`track`] | Track layout and screen/normalized conversions |
//! | [`notify`] | Listener registration and notification policy |
//! | [`config`] | Serde-backed host configuration |
//! | [`state`] | Saved selection snapshot |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared defaults (range, thumb size, touch slop) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod model;
pub mod notify;
pub mod number;
pub mod state;
pub mod steps;
pub mod track;

pub use engine::{Action, RangeSeekBar, Response};
pub use error::{Result, SeekBarError};
pub use model::{Thumb, ValueMode};
pub use number::{NumberKind, RangeValue};
