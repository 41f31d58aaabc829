//! Auth-domain account references, token secrets, and exchange results.

pub mod account;
pub mod result;
pub mod token;

pub use account::*;
pub use result::*;
pub use token::*;
