pub mod collision;
pub mod motion;

pub use collision::{collides_at, ground_height};
pub use motion::PlayerMotion;
