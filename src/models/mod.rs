pub mod enums;
pub mod chat;
pub mod contact;
pub mod directory;
pub mod quiz;
pub mod tutorial;
pub mod user;

pub use chat::*;
pub use contact::*;
pub use directory::*;
pub use quiz::*;
pub use tutorial::*;
pub use user::*;
