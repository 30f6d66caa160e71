use std::ops::Add;

/// 兩個數相加
#[must_use]
pub fn add_numbers<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
