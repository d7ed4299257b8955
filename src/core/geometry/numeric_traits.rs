pub trait FloatType {
    fn sqrt(x: Self) -> Self;
}
impl FloatType for f32 {
    fn sqrt(x: Self) -> Self {
        Self::sqrt(x)
    }
}
impl FloatType for f64 {
    fn sqrt(x: Self) -> Self {
        Self::sqrt(x)
    }
}
