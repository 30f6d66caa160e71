use crate::core::arithmetic::add_numbers;
use std::fmt;
use std::ops::Add;

/// 一次加法計算：兩個運算元與它們的和
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation<T> {
    pub lhs: T,
    pub rhs: T,
    pub sum: T,
}

impl<T: Add<Output = T> + Copy> Calculation<T> {
    pub fn new(lhs: T, rhs: T) -> Self {
        Self {
            lhs,
            rhs,
            sum: add_numbers(lhs, rhs),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Calculation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.lhs, self.rhs, self.sum)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed(Calculation<f64>),
    InvalidInput,
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}
