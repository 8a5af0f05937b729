pub mod appointment;
pub mod contact;
pub mod content;
pub mod enums;
pub mod reset;
pub mod service;
pub mod user;

pub use appointment::*;
pub use contact::*;
pub use content::*;
pub use enums::*;
pub use reset::*;
pub use service::*;
pub use user::*;
