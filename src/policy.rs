use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::monthly_installment;
use crate::application::CreditApplication;
use crate::decimal::{Money, Rate};
use crate::errors::Result;

/// lowest score admitted to the mid tier
pub const MID_TIER_FLOOR: u32 = 500;
/// highest score still in the mid tier
pub const MID_TIER_CEILING: u32 = 700;
/// active loans at or above this disqualify a high-tier applicant
pub const HIGH_TIER_MAX_ACTIVE_LOANS: u32 = 2;
/// mid tier payment cap as a fraction of monthly income
pub const MID_TIER_PAYMENT_RATIO: Decimal = dec!(0.25);
/// high tier payment cap as a fraction of monthly income
pub const HIGH_TIER_PAYMENT_RATIO: Decimal = dec!(0.30);

/// credit-score band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditTier {
    /// score below 500, rejected unconditionally
    Low,
    /// score 500-700 inclusive, needs a co-signer
    Mid,
    /// score above 700
    High,
}

impl CreditTier {
    /// band for a credit score
    pub fn from_score(score: u32) -> Self {
        if score < MID_TIER_FLOOR {
            CreditTier::Low
        } else if score <= MID_TIER_CEILING {
            CreditTier::Mid
        } else {
            CreditTier::High
        }
    }
}

/// outcome of evaluating one application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub approved: bool,
    pub tier: CreditTier,
    /// installment compared against the payment cap; absent for the
    /// low tier, which rejects before computing it
    pub installment: Option<Money>,
    /// income-based cap the installment was held to, when one applied
    pub payment_cap: Option<Money>,
}

impl Decision {
    fn rejected(tier: CreditTier) -> Self {
        Self {
            approved: false,
            tier,
            installment: None,
            payment_cap: None,
        }
    }
}

/// tiered approval policy, evaluated in order:
/// low tier rejects outright; mid tier needs a co-signer and an
/// installment within 25% of income; high tier needs fewer than two
/// active loans and an installment within 30% of income; everything
/// else falls through to rejection.
pub fn evaluate(
    application: &CreditApplication,
    annual_rate: Rate,
    term_months: u32,
) -> Result<Decision> {
    let tier = CreditTier::from_score(application.credit_score());

    if tier == CreditTier::Low {
        return Ok(Decision::rejected(tier));
    }

    // recomputed fresh on every evaluation
    let installment = monthly_installment(application.requested_amount(), annual_rate, term_months)?;

    if tier == CreditTier::Mid {
        let cap = application.monthly_income().fraction(MID_TIER_PAYMENT_RATIO);
        return Ok(Decision {
            approved: application.has_co_signer() && installment <= cap,
            tier,
            installment: Some(installment),
            payment_cap: Some(cap),
        });
    }

    if application.active_loan_count() >= HIGH_TIER_MAX_ACTIVE_LOANS {
        return Ok(Decision {
            installment: Some(installment),
            ..Decision::rejected(tier)
        });
    }

    let cap = application.monthly_income().fraction(HIGH_TIER_PAYMENT_RATIO);
    Ok(Decision {
        approved: installment <= cap,
        tier,
        installment: Some(installment),
        payment_cap: Some(cap),
    })
}
