//! Cleaning plan catalog

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plan identifier, serialized as the lowercase id (`"basic"`, …)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Basic,
    Standard,
    Premium,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::Basic, PlanId::Standard, PlanId::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    /// Catalog entry for this plan
    pub fn info(&self) -> &'static PlanInfo {
        match self {
            Self::Basic => &PLANS[0],
            Self::Standard => &PLANS[1],
            Self::Premium => &PLANS[2],
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        PlanId::ALL
            .into_iter()
            .find(|plan| plan.as_str().eq_ignore_ascii_case(id))
            .ok_or_else(|| ValidationError::UnknownPlan(s.to_string()))
    }
}

/// Annual billing discount, in percent
pub const ANNUAL_DISCOUNT_PERCENT: u32 = 15;

/// Display data for a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanInfo {
    pub id: PlanId,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Monthly price in whole euros
    pub monthly_price_eur: u32,
    pub hours_per_month: u32,
    /// Highlighted as the recommended option
    pub popular: bool,
}

impl PlanInfo {
    /// Yearly price with the annual discount, rounded to whole euros
    pub fn annual_price_eur(&self) -> u32 {
        let cents = self.monthly_price_eur * 12 * (100 - ANNUAL_DISCOUNT_PERCENT);
        (cents + 50) / 100
    }

    /// Amount saved per year by paying annually
    pub fn annual_savings_eur(&self) -> u32 {
        self.monthly_price_eur * 12 - self.annual_price_eur()
    }

    /// Price per cleaning hour, rounded to whole euros
    pub fn hourly_rate_eur(&self) -> u32 {
        if self.hours_per_month == 0 {
            return 0;
        }
        (self.monthly_price_eur * 2 + self.hours_per_month) / (self.hours_per_month * 2)
    }
}

/// The fixed plan catalog, in display order
pub static PLANS: [PlanInfo; 3] = [
    PlanInfo {
        id: PlanId::Basic,
        name: "Plan Básico",
        tagline: "Perfecto para mantenimiento semanal",
        monthly_price_eur: 49,
        hours_per_month: 4,
        popular: false,
    },
    PlanInfo {
        id: PlanId::Standard,
        name: "Plan Estándar",
        tagline: "Ideal para hogares con necesidades regulares",
        monthly_price_eur: 89,
        hours_per_month: 8,
        popular: true,
    },
    PlanInfo {
        id: PlanId::Premium,
        name: "Plan Premium",
        tagline: "Máxima limpieza y comodidad",
        monthly_price_eur: 129,
        hours_per_month: 12,
        popular: false,
    },
];
