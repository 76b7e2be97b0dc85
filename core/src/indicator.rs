//! Tracked macroeconomic indicators.

use serde::{Deserialize, Serialize};

pub const TARGET_INFLATION: f64 = 2.0;
pub const TARGET_GROWTH: f64 = 1.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Inflation,
    GdpGrowth,
    Unemployment,
    ExchangeRate,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 4] = [
        Self::Inflation,
        Self::GdpGrowth,
        Self::Unemployment,
        Self::ExchangeRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inflation    => "Inflation (HICP)",
            Self::GdpGrowth    => "GDP growth",
            Self::Unemployment => "Unemployment rate",
            Self::ExchangeRate => "EUR/USD",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::ExchangeRate => "$",
            _ => "%",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Indicator {
    pub kind:    IndicatorKind,
    pub value:   f64,
    /// Oldest first. Grows by one entry per resolved round.
    pub history: Vec<f64>,
    pub target:  Option<f64>,
}

impl Indicator {
    pub fn new(kind: IndicatorKind, value: f64, history: Vec<f64>) -> Self {
        let target = match kind {
            IndicatorKind::Inflation => Some(TARGET_INFLATION),
            IndicatorKind::GdpGrowth => Some(TARGET_GROWTH),
            _ => None,
        };
        Self { kind, value, history, target }
    }

    /// Set the new value and record it.
    pub fn record(&mut self, value: f64) {
        self.value = value;
        self.history.push(value);
    }

    /// Distance from target, if this indicator has one.
    pub fn gap(&self) -> Option<f64> {
        self.target.map(|t| self.value - t)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Indicators {
    pub inflation:     Indicator,
    pub gdp_growth:    Indicator,
    pub unemployment:  Indicator,
    pub exchange_rate: Indicator,
}

impl Indicators {
    pub fn get(&self, kind: IndicatorKind) -> &Indicator {
        match kind {
            IndicatorKind::Inflation    => &self.inflation,
            IndicatorKind::GdpGrowth    => &self.gdp_growth,
            IndicatorKind::Unemployment => &self.unemployment,
            IndicatorKind::ExchangeRate => &self.exchange_rate,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        IndicatorKind::ALL.into_iter().map(move |k| self.get(k))
    }

    pub fn snapshot(&self) -> IndicatorSnapshot {
        IndicatorSnapshot {
            inflation:     self.inflation.value,
            gdp_growth:    self.gdp_growth.value,
            unemployment:  self.unemployment.value,
            exchange_rate: self.exchange_rate.value,
        }
    }
}

/// Values of all four indicators at one point in time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IndicatorSnapshot {
    pub inflation:     f64,
    pub gdp_growth:    f64,
    pub unemployment:  f64,
    pub exchange_rate: f64,
}
