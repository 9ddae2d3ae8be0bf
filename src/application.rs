use serde::{Deserialize, Serialize};

use crate::amortization::{monthly_installment, InstallmentPlan};
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::policy::{self, Decision};

/// one consumer-credit application: the applicant's financial profile
/// plus the requested principal
///
/// Immutable value type. None of the fields are validated at
/// construction; callers are responsible for sane values (scores are
/// conventionally 0-1000). Field updates go through the `with_*`
/// constructors, which return a fresh instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditApplication {
    applicant_name: String,
    monthly_income: Money,
    active_loan_count: u32,
    credit_score: u32,
    requested_amount: Money,
    has_co_signer: bool,
}

impl CreditApplication {
    /// create an application with all six fields
    pub fn new(
        applicant_name: impl Into<String>,
        monthly_income: Money,
        active_loan_count: u32,
        credit_score: u32,
        requested_amount: Money,
        has_co_signer: bool,
    ) -> Self {
        Self {
            applicant_name: applicant_name.into(),
            monthly_income,
            active_loan_count,
            credit_score,
            requested_amount,
            has_co_signer,
        }
    }

    /// builder for creating applications
    pub fn builder() -> CreditApplicationBuilder {
        CreditApplicationBuilder::default()
    }

    pub fn applicant_name(&self) -> &str {
        &self.applicant_name
    }

    pub fn monthly_income(&self) -> Money {
        self.monthly_income
    }

    pub fn active_loan_count(&self) -> u32 {
        self.active_loan_count
    }

    pub fn credit_score(&self) -> u32 {
        self.credit_score
    }

    pub fn requested_amount(&self) -> Money {
        self.requested_amount
    }

    pub fn has_co_signer(&self) -> bool {
        self.has_co_signer
    }

    pub fn with_applicant_name(mut self, applicant_name: impl Into<String>) -> Self {
        self.applicant_name = applicant_name.into();
        self
    }

    pub fn with_monthly_income(mut self, monthly_income: Money) -> Self {
        self.monthly_income = monthly_income;
        self
    }

    pub fn with_active_loan_count(mut self, active_loan_count: u32) -> Self {
        self.active_loan_count = active_loan_count;
        self
    }

    pub fn with_credit_score(mut self, credit_score: u32) -> Self {
        self.credit_score = credit_score;
        self
    }

    pub fn with_requested_amount(mut self, requested_amount: Money) -> Self {
        self.requested_amount = requested_amount;
        self
    }

    pub fn with_co_signer(mut self, has_co_signer: bool) -> Self {
        self.has_co_signer = has_co_signer;
        self
    }

    /// monthly rate from an annual nominal rate, no compounding applied
    pub fn monthly_rate(&self, annual_rate: Rate) -> Rate {
        annual_rate.monthly()
    }

    /// fixed monthly installment for the requested amount under French
    /// amortization
    pub fn monthly_installment(&self, annual_rate: Rate, term_months: u32) -> Result<Money> {
        monthly_installment(self.requested_amount, annual_rate, term_months)
    }

    /// month-by-month installment plan for the requested amount
    pub fn installment_plan(&self, annual_rate: Rate, term_months: u32) -> Result<InstallmentPlan> {
        InstallmentPlan::generate(self.requested_amount, annual_rate, term_months)
    }

    /// full tiered-policy decision for this application
    pub fn decision(&self, annual_rate: Rate, term_months: u32) -> Result<Decision> {
        policy::evaluate(self, annual_rate, term_months)
    }

    /// approve/reject verdict for this application
    pub fn evaluate_approval(&self, annual_rate: Rate, term_months: u32) -> Result<bool> {
        Ok(self.decision(annual_rate, term_months)?.approved)
    }
}

/// builder for [`CreditApplication`]; unset fields default to an empty
/// name, zero amounts and counts, and no co-signer
#[derive(Debug, Clone, Default)]
pub struct CreditApplicationBuilder {
    applicant_name: String,
    monthly_income: Money,
    active_loan_count: u32,
    credit_score: u32,
    requested_amount: Money,
    has_co_signer: bool,
}

impl CreditApplicationBuilder {
    pub fn applicant_name(mut self, applicant_name: impl Into<String>) -> Self {
        self.applicant_name = applicant_name.into();
        self
    }

    pub fn monthly_income(mut self, monthly_income: Money) -> Self {
        self.monthly_income = monthly_income;
        self
    }

    pub fn active_loan_count(mut self, active_loan_count: u32) -> Self {
        self.active_loan_count = active_loan_count;
        self
    }

    pub fn credit_score(mut self, credit_score: u32) -> Self {
        self.credit_score = credit_score;
        self
    }

    pub fn requested_amount(mut self, requested_amount: Money) -> Self {
        self.requested_amount = requested_amount;
        self
    }

    pub fn co_signer(mut self, has_co_signer: bool) -> Self {
        self.has_co_signer = has_co_signer;
        self
    }

    pub fn build(self) -> CreditApplication {
        CreditApplication {
            applicant_name: self.applicant_name,
            monthly_income: self.monthly_income,
            active_loan_count: self.active_loan_count,
            credit_score: self.credit_score,
            requested_amount: self.requested_amount,
            has_co_signer: self.has_co_signer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CreditTier;
    use rust_decimal_macros::dec;

    fn mid_tier_applicant() -> CreditApplication {
        // 650 score, co-signer, 2,000,000 income, 5,000,000 requested
        CreditApplication::new(
            "Maria Fernanda",
            Money::from_major(2_000_000),
            1,
            650,
            Money::from_major(5_000_000),
            true,
        )
    }

    #[test]
    fn test_monthly_rate_passthrough() {
        let application = mid_tier_applicant();
        let monthly = application.monthly_rate(Rate::from_percentage(dec!(24)));
        assert_eq!(monthly.as_decimal(), dec!(0.02));
    }

    #[test]
    fn test_mid_tier_approved_with_co_signer() {
        // 24% annual over 12 months: installment lands under the
        // 500,000 cap (25% of income)
        let application = mid_tier_applicant();
        let rate = Rate::from_percentage(dec!(24));

        let installment = application.monthly_installment(rate, 12).unwrap();
        assert!(installment <= Money::from_major(500_000));

        assert!(application.evaluate_approval(rate, 12).unwrap());
    }

    #[test]
    fn test_mid_tier_rejected_without_co_signer() {
        let application = mid_tier_applicant().with_co_signer(false);
        let rate = Rate::from_percentage(dec!(24));
        assert!(!application.evaluate_approval(rate, 12).unwrap());
    }

    #[test]
    fn test_high_tier_verdict_matches_payment_cap() {
        // 800 score, one active loan, 3,000,000 income, 10,000,000
        // requested at 18% over 24 months
        let application = CreditApplication::builder()
            .applicant_name("Juan Esteban")
            .monthly_income(Money::from_major(3_000_000))
            .active_loan_count(1)
            .credit_score(800)
            .requested_amount(Money::from_major(10_000_000))
            .build();
        let rate = Rate::from_percentage(dec!(18));

        let installment = application.monthly_installment(rate, 24).unwrap();
        let cap = Money::from_major(900_000);
        assert_eq!(
            application.evaluate_approval(rate, 24).unwrap(),
            installment <= cap
        );
    }

    #[test]
    fn test_high_tier_rejected_by_loan_count() {
        let application = CreditApplication::builder()
            .applicant_name("Juan Esteban")
            .monthly_income(Money::from_major(3_000_000))
            .active_loan_count(2)
            .credit_score(800)
            .requested_amount(Money::from_major(10_000_000))
            .build();
        let rate = Rate::from_percentage(dec!(18));
        assert!(!application.evaluate_approval(rate, 24).unwrap());
    }

    #[test]
    fn test_low_tier_rejected_regardless_of_profile() {
        let application = mid_tier_applicant()
            .with_credit_score(499)
            .with_monthly_income(Money::from_major(1_000_000_000))
            .with_requested_amount(Money::from_major(1));
        assert!(!application
            .evaluate_approval(Rate::from_percentage(dec!(1)), 120)
            .unwrap());
    }

    #[test]
    fn test_score_boundaries_route_to_mid_tier() {
        for score in [500, 700] {
            let application = mid_tier_applicant().with_credit_score(score);
            let decision = application
                .decision(Rate::from_percentage(dec!(24)), 12)
                .unwrap();
            assert_eq!(decision.tier, CreditTier::Mid, "score {score}");
            assert!(decision.approved);
        }
    }

    #[test]
    fn test_with_constructors_leave_original_intact() {
        let original = mid_tier_applicant();
        let updated = original.clone().with_credit_score(720);
        assert_eq!(original.credit_score(), 650);
        assert_eq!(updated.credit_score(), 720);
        assert_eq!(updated.applicant_name(), original.applicant_name());
    }

    #[test]
    fn test_builder_defaults() {
        let application = CreditApplication::builder().build();
        assert_eq!(application.applicant_name(), "");
        assert_eq!(application.monthly_income(), Money::ZERO);
        assert_eq!(application.credit_score(), 0);
        assert!(!application.has_co_signer());
    }
}
