/// quick start - evaluate a single application
use credit_application_rs::{CreditApplication, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // mid-tier applicant asking for 5,000,000 at 24% over 12 months
    let application = CreditApplication::builder()
        .applicant_name("Maria Fernanda")
        .monthly_income(Money::from_major(2_000_000))
        .active_loan_count(1)
        .credit_score(650)
        .requested_amount(Money::from_major(5_000_000))
        .co_signer(true)
        .build();

    let rate = Rate::from_percentage(dec!(24));

    let installment = application.monthly_installment(rate, 12)?;
    println!("monthly installment: {}", installment.round_dp(2));

    let approved = application.evaluate_approval(rate, 12)?;
    println!("approved: {approved}");

    Ok(())
}
