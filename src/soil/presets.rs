//! Typical parameter sets for common soils
//!
//! Unit weights in kN/m³. Values are representative textbook figures for
//! preliminary checks; site investigation data always takes precedence.

use crate::soil::SoilLayer;

pub fn soft_clay(thickness: f64) -> SoilLayer {
    SoilLayer::new(thickness, 15.0, 17.0)
        .named("Soft clay")
        .with_compression(0.6, 0.1, 1.5)
}

pub fn medium_clay(thickness: f64) -> SoilLayer {
    SoilLayer::new(thickness, 17.0, 19.0)
        .named("Medium clay")
        .with_compression(0.3, 0.06, 1.0)
}

pub fn stiff_clay(thickness: f64) -> SoilLayer {
    SoilLayer::new(thickness, 18.0, 20.0)
        .named("Stiff clay")
        .with_compression(0.15, 0.03, 0.7)
        .with_ocr(3.0)
}

pub fn silt(thickness: f64) -> SoilLayer {
    SoilLayer::new(thickness, 17.0, 19.5)
        .named("Silt")
        .with_compression(0.2, 0.04, 0.9)
}

pub fn loose_sand(thickness: f64) -> SoilLayer {
    SoilLayer::new(thickness, 16.0, 19.0)
        .named("Loose sand")
        .with_compression(0.05, 0.01, 0.8)
}

pub fn dense_sand(thickness: f64) -> SoilLayer {
    SoilLayer::new(thickness, 18.0, 21.0)
        .named("Dense sand")
        .with_compression(0.02, 0.005, 0.55)
        .with_ocr(2.0)
}
