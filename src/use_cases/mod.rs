// Use cases layer: pure failure translation decisions.

pub mod translate;

pub use translate::{Translation, translate};
