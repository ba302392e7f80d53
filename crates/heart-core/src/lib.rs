pub mod animator;
pub mod config;
pub mod constants;
pub mod content;
pub mod curve;
pub mod grid;
pub mod layout;
pub mod scale;
pub mod stage;
pub mod stagger;
pub mod surface;

pub use animator::*;
pub use config::*;
pub use constants::*;
pub use curve::*;
pub use grid::*;
pub use layout::*;
pub use scale::*;
pub use stage::*;
pub use stagger::*;
pub use surface::*;
