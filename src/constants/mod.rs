pub mod color;
pub mod tags;

pub mod colors {
    pub use super::color::{BLURPLE, GREEN, RED, YELLOW};
}
