use crate::modules::fleet::core::car::CarId;
use crate::modules::fleet::use_cases::add_fuel_entry::command::AddFuelEntry;
use crate::modules::fleet::use_cases::create_car::command::CreateCar;

pub struct CreateCarBuilder {
    inner: CreateCar,
}

impl Default for CreateCarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateCarBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateCar {
                brand: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2018,
            },
        }
    }

    pub fn brand(mut self, v: impl Into<String>) -> Self {
        self.inner.brand = v.into();
        self
    }

    pub fn model(mut self, v: impl Into<String>) -> Self {
        self.inner.model = v.into();
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn build(self) -> CreateCar {
        self.inner
    }
}

pub struct AddFuelEntryBuilder {
    inner: AddFuelEntry,
}

impl Default for AddFuelEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddFuelEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: AddFuelEntry {
                car_id: 1,
                liters: 40.0,
                price: 52.5,
                odometer: 45_000,
            },
        }
    }

    pub fn car_id(mut self, v: CarId) -> Self {
        self.inner.car_id = v;
        self
    }

    pub fn liters(mut self, v: f64) -> Self {
        self.inner.liters = v;
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = v;
        self
    }

    pub fn odometer(mut self, v: i32) -> Self {
        self.inner.odometer = v;
        self
    }

    pub fn build(self) -> AddFuelEntry {
        self.inner
    }
}

#[cfg(test)]
mod command_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let car = CreateCarBuilder::default()
            .brand("Volvo")
            .model("V70")
            .year(2004)
            .build();
        assert_eq!(
            car,
            CreateCar {
                brand: "Volvo".into(),
                model: "V70".into(),
                year: 2004
            }
        );

        let fuel = AddFuelEntryBuilder::default()
            .car_id(3)
            .liters(12.5)
            .price(20.0)
            .odometer(100)
            .build();
        assert_eq!(fuel.car_id, 3);
        assert_eq!(fuel.entry().liters, 12.5);
        assert_eq!(fuel.entry().price, 20.0);
        assert_eq!(fuel.entry().odometer, 100);
    }
}
