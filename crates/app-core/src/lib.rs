pub mod constants;
pub mod constellation;
pub mod curtain;
pub mod lifecycle;
pub mod surface;
pub mod telemetry;
pub mod wave;

pub use constants::*;
pub use constellation::*;
pub use curtain::*;
pub use lifecycle::*;
pub use surface::*;
pub use telemetry::*;
pub use wave::*;
