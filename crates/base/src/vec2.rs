use std::{fmt, ops::Mul};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy + Mul<Output = T>> Vec2<T> {
    /// `x * y`, the pixel count when used as an image size.
    pub fn area(&self) -> T {
        self.x * self.y
    }
}

impl Vec2<usize> {
    pub fn checked_area(&self) -> Option<usize> {
        self.x.checked_mul(self.y)
    }
}
