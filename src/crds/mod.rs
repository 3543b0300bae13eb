pub mod overlay;

pub use overlay::{Binding, Overlay};
