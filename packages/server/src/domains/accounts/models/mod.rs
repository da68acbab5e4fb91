mod account;
mod codes;
mod phone;

pub use account::*;
pub use codes::*;
pub use phone::*;
