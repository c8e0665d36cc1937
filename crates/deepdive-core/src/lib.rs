pub mod attr;
pub mod command;
pub mod constants;
pub mod error;
pub mod host;
pub mod input;
pub mod mixer;
pub mod navigation;
pub mod planet;
pub mod proximity;
pub mod scene;
pub mod session;

pub use command::*;
pub use constants::*;
pub use error::CoreError;
pub use host::{dispatch, AudioPlayer, SceneGraph};
pub use input::*;
pub use mixer::*;
pub use navigation::*;
pub use planet::PlanetDecorator;
pub use proximity::*;
pub use scene::*;
pub use session::*;
