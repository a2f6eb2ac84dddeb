pub mod error;

pub mod address;
pub mod codec;
pub mod normalize;
pub mod session;

pub use crate::address::Address;
pub use crate::codec::token::{decode, encode, ShareToken};
pub use crate::error::ShareError;
pub use crate::session::Session;
