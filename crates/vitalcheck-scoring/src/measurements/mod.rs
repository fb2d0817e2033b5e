pub mod blood_pressure;
pub mod blood_sugar;
pub mod bmi;
