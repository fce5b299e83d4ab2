pub use crate::defs::{d1, d10, d100, d12, d2, d20, d3, d4, d6, d8};
pub use crate::{Approx, Distribution, Error};
