pub mod hover;
pub mod shake;

pub use hover::HoverState;
pub use shake::Shake;
