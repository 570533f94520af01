pub mod builder;
pub mod clock;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use clock::FixtureClock;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_LATITUDE, TEST_LONGITUDE},
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
