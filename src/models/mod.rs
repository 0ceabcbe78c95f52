pub mod analysis;
pub mod demographics;
pub mod enums;
pub mod rule;

pub use analysis::*;
pub use demographics::*;
pub use enums::*;
pub use rule::*;
