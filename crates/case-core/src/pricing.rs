//! # Pricing
//!
//! Fixed price table for case configurations. All amounts are in the smallest
//! currency unit (paise); the storefront sells in a single currency.

use crate::configuration::{Configuration, Finish, Material};

/// Fixed checkout currency (ISO 4217)
pub const CURRENCY: &str = "INR";

/// Base price of a case, in paise
pub const BASE_PRICE: i64 = 1400;

/// Surcharge for a textured finish, in paise
pub const TEXTURED_FINISH_SURCHARGE: i64 = 300;

/// Surcharge for polycarbonate material, in paise
pub const POLYCARBONATE_SURCHARGE: i64 = 500;

impl Finish {
    /// Surcharge this finish adds to the base price
    pub fn surcharge(&self) -> i64 {
        match self {
            Finish::Textured => TEXTURED_FINISH_SURCHARGE,
            Finish::None => 0,
        }
    }
}

impl Material {
    /// Surcharge this material adds to the base price
    pub fn surcharge(&self) -> i64 {
        match self {
            Material::Polycarbonate => POLYCARBONATE_SURCHARGE,
            Material::Silicone => 0,
        }
    }
}

/// Quote a configuration: base price plus finish and material surcharges.
pub fn quote(configuration: &Configuration) -> i64 {
    BASE_PRICE + configuration.finish.surcharge() + configuration.material.surcharge()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_all_surcharges() {
        let cfg = Configuration::new("c1", Finish::Textured, Material::Polycarbonate);
        assert_eq!(
            quote(&cfg),
            BASE_PRICE + TEXTURED_FINISH_SURCHARGE + POLYCARBONATE_SURCHARGE
        );
    }

    #[test]
    fn test_quote_base_only() {
        let cfg = Configuration::new("c2", Finish::None, Material::Silicone);
        assert_eq!(quote(&cfg), BASE_PRICE);
    }

    #[test]
    fn test_quote_single_surcharge() {
        let textured = Configuration::new("c3", Finish::Textured, Material::Silicone);
        assert_eq!(quote(&textured), BASE_PRICE + TEXTURED_FINISH_SURCHARGE);

        let poly = Configuration::new("c4", Finish::None, Material::Polycarbonate);
        assert_eq!(quote(&poly), BASE_PRICE + POLYCARBONATE_SURCHARGE);
    }
}
