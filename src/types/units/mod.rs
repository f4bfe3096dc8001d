mod display;
mod explicit_unit_values;

pub use uom::si::f64::{Length, Pressure};

pub use uom::si::{
    length::{centimeter, meter, millimeter},
    pressure::{kilopascal, megapascal, pascal},
};

pub use display::{DisplayLength, DisplayPressure, DisplaySettlement};
pub use explicit_unit_values::{LengthValue, PressureValue, UnitError, WithUnit};
