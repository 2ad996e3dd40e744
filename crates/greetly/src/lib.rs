/* # Why have greetly as a library crate separate from the CLI?
greetly holds the greeting operation plus the error handling and tracing
conventions shared with the binary. Keeping the binary out of the library
keeps the public surface a single function and two constants.
*/

pub mod error;
pub mod greeter;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{GreetlyError, GreetlyResult, ResultExt};
pub use greeter::{DEFAULT_NAME, VERSION, greet};
