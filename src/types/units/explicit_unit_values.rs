use serde::{self, Deserialize, Serialize};
use std::marker::PhantomData;
use uom::si::{
    f64::{Length, Pressure},
    length::{centimeter, meter, millimeter},
    pressure::{kilopascal, megapascal, pascal},
};

/// A raw value tagged with the unit it was written in (scenario files, JSON)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type LengthValue = WithUnit<Length>;
pub type PressureValue = WithUnit<Pressure>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown length unit: {0} (SI units only: m, cm, mm)")]
    UnknownLengthUnit(String),

    #[error("Unknown pressure unit: {0} (SI units only: Pa, kPa, MPa)")]
    UnknownPressureUnit(String),
}

impl WithUnit<Length> {
    pub fn to_length(&self) -> Result<Length, UnitError> {
        match self.unit.as_str() {
            "m" | "M"
            | "meter" | "Meter" | "METER"
            | "metre" | "Metre" | "METRE"
            | "meters" | "Meters" | "METERS"
            | "metres" | "Metres" | "METRES" => Ok(Length::new::<meter>(self.value)),
            "cm" | "CM"
            | "centimeter" | "Centimeter"
            | "centimetre" | "Centimetre"
            | "centimeters" | "Centimeters"
            | "centimetres" | "Centimetres" => Ok(Length::new::<centimeter>(self.value)),
            "mm" | "MM"
            | "millimeter" | "Millimeter"
            | "millimetre" | "Millimetre"
            | "millimeters" | "Millimeters"
            | "millimetres" | "Millimetres" => Ok(Length::new::<millimeter>(self.value)),
            _ => Err(UnitError::UnknownLengthUnit(self.unit.clone())),
        }
    }

    /// Value in meters
    pub fn meters(&self) -> Result<f64, UnitError> {
        Ok(self.to_length()?.get::<meter>())
    }

    pub fn from_length(length: Length, unit: &str) -> Result<Self, UnitError> {
        let value = match unit {
            "m" | "meter" | "metre" | "meters" | "metres" => length.get::<meter>(),
            "cm" | "centimeter" | "centimetre" | "centimeters" | "centimetres" => {
                length.get::<centimeter>()
            }
            "mm" | "millimeter" | "millimetre" | "millimeters" | "millimetres" => {
                length.get::<millimeter>()
            }
            _ => return Err(UnitError::UnknownLengthUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

impl WithUnit<Pressure> {
    pub fn to_pressure(&self) -> Result<Pressure, UnitError> {
        match self.unit.as_str() {
            "pa" | "Pa" | "PA"
            | "pascal" | "Pascal" | "pascals" | "Pascals"
            | "N/m²" | "N/m^2" => Ok(Pressure::new::<pascal>(self.value)),
            "kPa" | "kpa" | "KPa" | "kPA"
            | "kilopascal" | "Kilopascal" | "kilopascals" | "Kilopascals"
            | "kN/m²" | "kN/m^2" => Ok(Pressure::new::<kilopascal>(self.value)),
            "MPa" | "mpa" | "Mpa"
            | "megapascal" | "Megapascal" | "megapascals" | "Megapascals" => {
                Ok(Pressure::new::<megapascal>(self.value))
            }
            _ => Err(UnitError::UnknownPressureUnit(self.unit.clone())),
        }
    }

    /// Value in kilopascals
    pub fn kilopascals(&self) -> Result<f64, UnitError> {
        Ok(self.to_pressure()?.get::<kilopascal>())
    }

    pub fn from_pressure(pressure: Pressure, unit: &str) -> Result<Self, UnitError> {
        let value = match unit {
            "Pa" | "pascal" | "pascals" => pressure.get::<pascal>(),
            "kPa" | "kilopascal" | "kilopascals" => pressure.get::<kilopascal>(),
            "MPa" | "megapascal" | "megapascals" => pressure.get::<megapascal>(),
            _ => return Err(UnitError::UnknownPressureUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}
