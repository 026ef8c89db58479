
pub use platform::{MockExtensions, MockMemory, MockOracle, MockSet, MockTranslation, MockTraps};
