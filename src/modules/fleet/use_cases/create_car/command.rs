#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCar {
    pub brand: String,
    pub model: String,
    pub year: i32,
}
