use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("Division by zero: cannot average an empty timestamp sequence")]
    DivisionByZero,
}
