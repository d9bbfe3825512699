//! Plan, package and currency catalog
//!
//! A catalog is loaded from JSON or falls back to the built-in offering.

use crate::{
    error::{HashYieldError, Result},
    types::{Cryptocurrency, MiningPackage, PayoutInterval, Plan, ReturnType},
    validation::{validate_package, validate_plan, validate_profitability},
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub plans: Vec<Plan>,
    pub packages: Vec<MiningPackage>,
    pub currencies: Vec<Cryptocurrency>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn plan(
    id: &str,
    name: &str,
    (min_amount, max_amount): (f64, f64),
    rate_percent: f64,
    term_days: u32,
    return_type: ReturnType,
    payout_interval: PayoutInterval,
) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        min_amount,
        max_amount,
        rate_percent,
        term_days,
        return_type,
        payout_interval,
        reinvest_allowed: return_type == ReturnType::Fixed,
    }
}

fn package(
    id: &str,
    name: &str,
    power: f64,
    price: f64,
    duration_days: u32,
    available_units: u32,
) -> MiningPackage {
    MiningPackage {
        id: id.to_string(),
        name: name.to_string(),
        power,
        price,
        duration_days,
        maintenance_fee_percent_per_day: 0.05,
        available_units,
    }
}

impl Catalog {
    /// The offering shipped with the dashboard
    #[must_use]
    pub fn builtin() -> Self {
        use PayoutInterval::{Daily, EndOfTerm, Weekly};
        use ReturnType::{Compound, Fixed};

        Self {
            plans: vec![
                plan("starter", "Starter", (100.0, 999.0), 1.5, 30, Fixed, Daily),
                plan("silver", "Silver", (1_000.0, 4_999.0), 2.0, 45, Fixed, Weekly),
                plan("gold", "Gold", (5_000.0, 19_999.0), 1.2, 60, Compound, EndOfTerm),
                plan("platinum", "Platinum", (20_000.0, 100_000.0), 3.0, 90, Fixed, Daily),
            ],
            packages: vec![
                package("basic", "Basic", 100.0, 500.0, 90, 50),
                package("advanced", "Advanced", 250.0, 1_100.0, 120, 30),
                package("pro", "Pro", 500.0, 2_000.0, 180, 15),
                package("enterprise", "Enterprise", 2_000.0, 7_500.0, 365, 5),
            ],
            currencies: vec![
                Cryptocurrency::from_coin_yield("BTC", 0.000_12, 30_000.0),
                Cryptocurrency::from_coin_yield("ETH", 0.002_5, 1_800.0),
                Cryptocurrency::from_coin_yield("LTC", 0.045, 85.0),
            ],
        }
    }

    /// Parse and validate a catalog from JSON
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or any entry violates its invariants
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every plan, package and currency against the data model invariants
    ///
    /// # Errors
    /// Returns the first invalid entry's error
    pub fn validate(&self) -> Result<()> {
        for plan in &self.plans {
            validate_plan(plan)?;
        }
        for package in &self.packages {
            validate_package(package)?;
        }
        for currency in &self.currencies {
            validate_profitability(currency.profitability_per_unit_per_day).map_err(|e| {
                HashYieldError::InvalidInput(format!("Currency '{}': {e}", currency.symbol))
            })?;
        }
        Ok(())
    }

    /// Look up a plan by id
    ///
    /// # Errors
    /// Returns `PlanNotFound` if no plan has that id
    pub fn plan(&self, id: &str) -> Result<&Plan> {
        self.plans
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| HashYieldError::PlanNotFound(id.to_string()))
    }

    /// Look up a mining package by id
    ///
    /// # Errors
    /// Returns `PackageNotFound` if no package has that id
    pub fn package(&self, id: &str) -> Result<&MiningPackage> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| HashYieldError::PackageNotFound(id.to_string()))
    }

    /// Look up a mineable currency by symbol, ignoring case
    ///
    /// # Errors
    /// Returns `UnsupportedCurrency` if the symbol is not mineable
    pub fn currency(&self, symbol: &str) -> Result<&Cryptocurrency> {
        self.currencies
            .iter()
            .find(|c| c.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| HashYieldError::UnsupportedCurrency(symbol.to_string()))
    }
}

/// Load a catalog from file path or the default per-user location
///
/// Without an explicit path, `~/.config/hashyield/catalog.json` is used when it
/// exists and the built-in catalog otherwise.
///
/// # Errors
/// Returns an error if the file cannot be read or does not hold a valid catalog
pub fn load_catalog(catalog_path: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = catalog_path {
        return read_catalog_file(path);
    }

    load_catalog_or_builtin(default_catalog_path().as_deref())
}

/// Per-user catalog location, `~/.config/hashyield/catalog.json`
#[must_use]
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("hashyield")
            .join("catalog.json")
    })
}

fn load_catalog_or_builtin(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) if path.exists() => read_catalog_file(path),
        _ => {
            debug!("No catalog file found, using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

fn read_catalog_file(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path).map_err(|e| {
        HashYieldError::Generic(format!(
            "Failed to load catalog from {}: {e}",
            path.display()
        ))
    })?;
    let catalog = Catalog::from_json(&json)?;
    info!(
        "Loaded catalog from {}: {} plans, {} packages, {} currencies",
        path.display(),
        catalog.plans.len(),
        catalog.packages.len(),
        catalog.currencies.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.plans.len(), 4);
        assert_eq!(catalog.packages.len(), 4);
        assert!(catalog.plan("gold").unwrap().is_compounding());
        assert!(catalog.currency("btc").is_ok());
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.plan("diamond"),
            Err(HashYieldError::PlanNotFound(_))
        ));
        assert!(matches!(
            catalog.package("mega"),
            Err(HashYieldError::PackageNotFound(_))
        ));
        assert!(matches!(
            catalog.currency("DOGE"),
            Err(HashYieldError::UnsupportedCurrency(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut catalog = Catalog::builtin();
        catalog.plans.truncate(1);
        fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

        let loaded = load_catalog(Some(&path)).unwrap();
        assert_eq!(loaded.plans.len(), 1);
        assert_eq!(loaded.plans[0].id, "starter");
        assert_eq!(loaded.packages.len(), catalog.packages.len());
        assert!(loaded.currency("ETH").is_ok());
    }

    #[test]
    fn test_load_nonexistent_catalog() {
        let result = load_catalog(Some(Path::new("/nonexistent/catalog.json")));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to load catalog"));
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut catalog = Catalog::builtin();
        catalog.plans[0].min_amount = 10_000.0;
        fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

        assert!(matches!(
            load_catalog(Some(&path)),
            Err(HashYieldError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_default_catalog_location() {
        if let Some(path) = default_catalog_path() {
            assert!(path.ends_with(".config/hashyield/catalog.json"));
        }
    }

    #[test]
    fn test_default_location_used_when_present() {
        let home = tempdir().unwrap();
        let path = home
            .path()
            .join(".config")
            .join("hashyield")
            .join("catalog.json");

        // Nothing there yet: built-in catalog
        let loaded = load_catalog_or_builtin(Some(&path)).unwrap();
        assert_eq!(loaded.plans.len(), Catalog::builtin().plans.len());
        assert!(load_catalog_or_builtin(None).is_ok());

        let mut catalog = Catalog::builtin();
        catalog.packages.retain(|p| p.id == "pro");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

        let loaded = load_catalog_or_builtin(Some(&path)).unwrap();
        assert_eq!(loaded.packages.len(), 1);
        assert_eq!(loaded.packages[0].id, "pro");
    }

    #[test]
    fn test_non_finite_currency_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.currencies[1].profitability_per_unit_per_day = f64::INFINITY;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Currency 'ETH'"));

        catalog.currencies[1].profitability_per_unit_per_day = -0.5;
        assert!(catalog.validate().is_err());
    }
}
