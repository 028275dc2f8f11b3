//! JWT claims, clock and codec.

pub mod claims;
pub mod clock;
pub mod codec;

pub use claims::{Claim, IssuedClaims};
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{TokenCodec, ALGORITHM, DEFAULT_EXPIRY};
