//! Car entity and its optional owner.

/// Registered owner of a car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

/// A car that policies and claims are attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: i64,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub owner: Option<Owner>,
}

impl Car {
    /// Creates a new Car instance.
    pub fn new(
        id: i64,
        vin: String,
        make: String,
        model: String,
        year_of_manufacture: i32,
        owner: Option<Owner>,
    ) -> Self {
        Self {
            id,
            vin,
            make,
            model,
            year_of_manufacture,
            owner,
        }
    }
}
