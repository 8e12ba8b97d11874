pub mod classifiers;
pub mod cli;
pub mod core;
pub mod io;
pub mod render;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
