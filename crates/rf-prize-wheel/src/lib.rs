//! # rf-prize-wheel: Prize Wheel Spin Engine
//!
//! Resolves spins of a weighted prize wheel and drives the animation that
//! presents them.
//!
//! ## Features
//!
//! - **Weighted Selection**: one random draw picks the winning sector
//! - **Rotation Planning**: forward-only multi-turn spins that land clear of seams
//! - **Tick Detection**: fires the indicator dip as each seam passes the pointer
//! - **Spin Session**: `Idle -> Spinning -> Idle` state machine over an injected
//!   animation service
//!
//! ## Architecture
//!
//! ```text
//! SpinSession
//!     │
//!     ├── ProbabilitySelector (winner index)
//!     ├── RotationPlanner (RotationPlan)
//!     ├── TickDetector (per-frame seam check)
//!     └── AnimationService (external: tweens, dip, progress)
//!           │
//!           v
//!     SpinOutcome
//! ```

pub mod angle;
pub mod animation;
pub mod config;
pub mod error;
pub mod headless;
pub mod planner;
pub mod sector;
pub mod selector;
pub mod session;
pub mod tick;

pub use angle::*;
pub use animation::*;
pub use config::*;
pub use error::*;
pub use headless::*;
pub use planner::*;
pub use sector::*;
pub use selector::*;
pub use session::*;
pub use tick::*;
