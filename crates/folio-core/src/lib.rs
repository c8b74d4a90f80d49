pub mod compose;
pub mod constants;
pub mod haptics;
pub mod perf;
pub mod pointer;
pub mod policy;
pub mod scroll;
pub mod visibility;

pub use compose::*;
pub use haptics::*;
pub use perf::*;
pub use pointer::*;
pub use policy::*;
pub use scroll::*;
pub use visibility::*;
