use crate::domain::Currency;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::info;

const DEFAULT_OPEN_BONUS_RUR: i64 = 1000;
const DEFAULT_RUR_PER_USD: i64 = 65;
const DEFAULT_RUR_PER_EUR: i64 = 75;

/// Tariff data the bank applies when opening cards: the one-time opening
/// bonus (minor units of RUR) and the fixed conversion rates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tariff {
    pub open_bonus_rur: i64,
    pub rur_per_usd: i64,
    pub rur_per_eur: i64,
}

impl Tariff {
    fn from_env() -> Self {
        fn env_i64(name: &str, default: i64) -> i64 {
            std::env::var(name)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        Self {
            open_bonus_rur: env_i64("TARIFF_OPEN_BONUS", DEFAULT_OPEN_BONUS_RUR),
            rur_per_usd: env_i64("TARIFF_RUR_PER_USD", DEFAULT_RUR_PER_USD),
            rur_per_eur: env_i64("TARIFF_RUR_PER_EUR", DEFAULT_RUR_PER_EUR),
        }
    }

    /// Converts an amount of minor RUR units into minor units of the
    /// target currency at the tariff rate, rounding down.
    pub fn convert_from_rur(&self, amount: i64, currency: Currency) -> i64 {
        match currency {
            Currency::Rur => amount,
            Currency::Usd => amount / self.rur_per_usd,
            Currency::Eur => amount / self.rur_per_eur,
        }
    }
}

/// Process-wide tariff state with an explicit refresh lifecycle, owned by
/// whoever spawns `run_tariff_refresher`.
pub struct TariffStore {
    inner: RwLock<Tariff>,
}

impl TariffStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Tariff::from_env()),
        }
    }

    pub fn current(&self) -> Tariff {
        self.inner.read().expect("tariff lock poisoned").clone()
    }

    pub fn refresh(&self) {
        let next = Tariff::from_env();
        let mut guard = self.inner.write().expect("tariff lock poisoned");
        if *guard != next {
            info!("🔄 Tariff data changed: {next:?}");
        }
        *guard = next;
    }
}

impl Default for TariffStore {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn run_tariff_refresher(store: Arc<TariffStore>, period: Duration) {
    let mut interval = tokio::time::interval(period);
    // First tick fires immediately; the store is already seeded.
    interval.tick().await;

    loop {
        interval.tick().await;
        store.refresh();
        info!("🔄 Tariff data refreshed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tariff() -> Tariff {
        Tariff {
            open_bonus_rur: 1000,
            rur_per_usd: 65,
            rur_per_eur: 75,
        }
    }

    #[test]
    fn rur_conversion_is_identity() {
        assert_eq!(tariff().convert_from_rur(1000, Currency::Rur), 1000);
    }

    #[test]
    fn foreign_currency_conversion_rounds_down() {
        assert_eq!(tariff().convert_from_rur(1000, Currency::Usd), 15);
        assert_eq!(tariff().convert_from_rur(1000, Currency::Eur), 13);
    }
}
