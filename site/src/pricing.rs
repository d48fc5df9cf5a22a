//! Billing period selection and the prices it derives.

use crate::types::Plan;

/// Months billed up front on an annual plan.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Billing period shown by the pricing toggle. Resets to `Monthly` on mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn toggle(self) -> Self {
        match self {
            Self::Monthly => Self::Annual,
            Self::Annual => Self::Monthly,
        }
    }

    pub fn is_annual(self) -> bool {
        matches!(self, Self::Annual)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }
}

/// What a plan card displays for a given billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    /// Headline price in dollars per month
    pub per_month: u32,
    /// Amount billed per year; only present for annual billing
    pub yearly_total: Option<u32>,
}

impl Plan {
    pub fn quote(&self, period: BillingPeriod) -> PriceQuote {
        match period {
            BillingPeriod::Monthly => PriceQuote {
                per_month: self.monthly_price,
                yearly_total: None,
            },
            BillingPeriod::Annual => PriceQuote {
                per_month: self.annual_price,
                yearly_total: Some(self.annual_price.saturating_mul(MONTHS_PER_YEAR)),
            },
        }
    }

    /// Percentage of the monthly price saved by paying annually, rounded half up.
    pub fn annual_savings_percent(&self) -> u32 {
        if self.monthly_price == 0 || self.annual_price >= self.monthly_price {
            return 0;
        }
        let monthly = u64::from(self.monthly_price);
        let saved = monthly - u64::from(self.annual_price);
        // saved <= monthly, so the result is at most 100
        ((saved * 100 + monthly / 2) / monthly) as u32
    }
}

/// Largest annual saving across `plans`, for the toggle badge.
pub fn best_annual_savings(plans: &[Plan]) -> u32 {
    plans
        .iter()
        .map(Plan::annual_savings_percent)
        .max()
        .unwrap_or(0)
}

/// Dollar amount formatted the way the cards print it.
pub fn format_dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PLANS;
    use pretty_assertions::assert_eq;

    fn plan(monthly_price: u32, annual_price: u32) -> Plan {
        Plan {
            name: "Test",
            description: "",
            monthly_price,
            annual_price,
            features: &[],
            cta: "Go",
            popular: false,
            gradient: "",
        }
    }

    #[test]
    fn default_period_is_monthly() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    }

    #[test]
    fn toggle_flips_between_periods() {
        let period = BillingPeriod::Monthly.toggle();
        assert_eq!(period, BillingPeriod::Annual);
        assert_eq!(period.toggle(), BillingPeriod::Monthly);
    }

    #[test]
    fn monthly_quote_has_no_yearly_total() {
        for plan in PLANS {
            let quote = plan.quote(BillingPeriod::Monthly);
            assert_eq!(quote.per_month, plan.monthly_price);
            assert_eq!(quote.yearly_total, None);
        }
    }

    #[test]
    fn annual_quote_bills_twelve_months() {
        for plan in PLANS {
            let quote = plan.quote(BillingPeriod::Annual);
            assert_eq!(quote.per_month, plan.annual_price);
            assert_eq!(quote.yearly_total, Some(plan.annual_price * 12));
        }
    }

    #[test]
    fn savings_round_half_up() {
        assert_eq!(plan(49, 39).annual_savings_percent(), 20);
        assert_eq!(plan(100, 75).annual_savings_percent(), 25);
        assert_eq!(plan(3, 2).annual_savings_percent(), 33);
        assert_eq!(plan(2, 1).annual_savings_percent(), 50);
    }

    #[test]
    fn savings_on_large_prices_do_not_overflow() {
        assert_eq!(plan(100_000_000, 75_000_000).annual_savings_percent(), 25);
        assert_eq!(plan(u32::MAX, u32::MAX / 2).annual_savings_percent(), 50);
        assert_eq!(plan(u32::MAX, 0).annual_savings_percent(), 100);
    }

    #[test]
    fn no_savings_when_annual_is_not_cheaper() {
        assert_eq!(plan(0, 0).annual_savings_percent(), 0);
        assert_eq!(plan(10, 10).annual_savings_percent(), 0);
        assert_eq!(plan(10, 12).annual_savings_percent(), 0);
    }

    #[test]
    fn best_savings_across_shipped_plans() {
        assert_eq!(best_annual_savings(&PLANS), 20);
        assert_eq!(best_annual_savings(&[]), 0);
    }

    #[test]
    fn dollars_get_thousands_separators() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(468), "$468");
        assert_eq!(format_dollars(1428), "$1,428");
        assert_eq!(format_dollars(1234567), "$1,234,567");
    }
}
