pub mod config;
pub mod constants;
pub mod handles;
pub mod interaction;
pub mod notifier;
pub mod progress;
pub mod scale;
pub mod slider;
pub mod value_space;

pub use config::*;
pub use handles::*;
pub use interaction::*;
pub use notifier::*;
pub use progress::*;
pub use scale::*;
pub use slider::*;
pub use value_space::*;
