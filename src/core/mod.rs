pub mod color;
pub mod function;
pub mod number;

pub use color::Color;
pub use function::JsFunction;
pub use number::Number;
