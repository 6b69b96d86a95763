//! Card system: definitions, instances, the behavior contract and the
//! registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Name, type flags and printed cost
//! - `CardInstance`: One physical card
//! - `CardBehavior`: Lifecycle hooks implemented by card content
//! - `CardRegistry`: Definition and behavior lookup

pub mod types;
pub mod definition;
pub mod instance;
pub mod behavior;
pub mod registry;

pub use types::{CardTypes, Cost};
pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
pub use behavior::{CardBehavior, Play, Step, StepResult};
pub use registry::CardRegistry;
