pub mod clock;
pub mod errors;
pub mod services;
pub mod utils;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use validator::{InputValidator, RawExpense};
