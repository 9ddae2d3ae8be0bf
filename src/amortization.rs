use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{EvaluationError, Result};

/// fixed monthly installment under French (constant-payment) amortization
///
/// Zero monthly rate falls back to straight-line `principal / term`.
/// Negative rates and negative principals are not rejected; the formula
/// is applied mechanically. `term_months == 0` and rates that collapse
/// the denominator `(1+r)^n - 1` to zero are the only error cases.
pub fn monthly_installment(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Money> {
    if term_months == 0 {
        return Err(EvaluationError::ZeroTerm);
    }

    let monthly_rate = annual_rate.monthly().as_decimal();

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    // EMI = M * r * (1 + r)^n / ((1 + r)^n - 1)
    let compound = compound_factor(monthly_rate, term_months);
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        return Err(EvaluationError::DegenerateDenominator {
            rate: annual_rate,
            term_months,
        });
    }

    let numerator = principal.as_decimal() * monthly_rate * compound;
    Ok(Money::from_decimal(numerator / denominator))
}

/// (1 + r)^n by repeated multiplication
fn compound_factor(monthly_rate: Decimal, months: u32) -> Decimal {
    let base = Decimal::ONE + monthly_rate;
    let mut compound = Decimal::ONE;
    for _ in 0..months {
        compound *= base;
    }
    compound
}

/// one row of an installment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedPayment {
    pub payment_number: u32,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
}

/// month-by-month view of a French amortization loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub installment: Money,
    pub payments: Vec<PlannedPayment>,
    pub total_interest: Money,
    pub total_paid: Money,
}

impl InstallmentPlan {
    /// generate the full payment schedule
    pub fn generate(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Self> {
        let installment = monthly_installment(principal, annual_rate, term_months)?;
        let monthly_rate = annual_rate.monthly().as_decimal();

        let mut payments = Vec::with_capacity(term_months as usize);
        let mut balance = principal;

        for i in 1..=term_months {
            let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate);
            let principal_portion = installment - interest_portion;
            let ending_balance = (balance - principal_portion).max(Money::ZERO);

            payments.push(PlannedPayment {
                payment_number: i,
                beginning_balance: balance,
                payment_amount: installment,
                principal_portion,
                interest_portion,
                ending_balance,
            });

            balance = ending_balance;
        }

        // fold rounding residue into the last payment
        if let Some(last) = payments.last_mut() {
            if last.ending_balance > Money::ZERO && last.ending_balance < Money::ONE {
                last.principal_portion += last.ending_balance;
                last.payment_amount += last.ending_balance;
                last.ending_balance = Money::ZERO;
            }
        }

        let total_interest = payments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_paid = payments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            principal,
            annual_rate,
            term_months,
            installment,
            payments,
            total_interest,
            total_paid,
        })
    }

    /// get row for specific period (1-based)
    pub fn payment(&self, payment_number: u32) -> Option<&PlannedPayment> {
        self.payments.get(payment_number.checked_sub(1)? as usize)
    }
}
