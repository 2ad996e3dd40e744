/// Name substituted into the greeting when the caller supplies none.
pub const DEFAULT_NAME: &str = "World";

/// Crate version string, taken from the package manifest.
/// Carries no behavioral significance.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns a greeting for `name`, or for [`DEFAULT_NAME`] when `name` is `None`.
///
/// The output is exactly `Hello, <name>!`. The name is passed through
/// verbatim; the empty string is a valid name and yields `Hello, !`.
///
/// Pure function: no side effects, no shared state, safe to call from any
/// number of threads without coordination.
///
/// # Example
/// ```
/// use greetly::greeter::greet;
/// assert_eq!(greet(None), "Hello, World!");
/// assert_eq!(greet(Some("Ferris")), "Hello, Ferris!");
/// ```
pub fn greet(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}
