pub mod projection;
pub mod user;

pub use projection::Projection;
pub use user::{User, UserPatch, WriteSet};
