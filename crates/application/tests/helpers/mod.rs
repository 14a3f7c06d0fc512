mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{canonical, grouped, logical_line, EXAMPLE_ZONE};
