//! Problems module - randomized, stateless problem generators
//!
//! Re-exports only. All logic in submodules.

mod numbers;
mod arithmetic;
mod picker;
mod puzzle;
mod right_box;

pub use numbers::{is_even, is_fibonacci, is_odd, is_prime, NumberType, Parity};
pub use arithmetic::{ArithmeticProblem, MAX_ADDEND};
pub use picker::{NumberPickerProblem, PICK_COUNT, PICK_MAX, PICK_MIN};
pub use puzzle::{MathPuzzleProblem, OPTION_COUNT};
pub use right_box::{random_position, DraggableNumber, RightBoxLevel, VALUE_MAX, VALUE_MIN};
