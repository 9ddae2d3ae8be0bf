/// full decision and installment plan rendered as JSON
use credit_application_rs::{CreditApplication, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // high-tier applicant asking for 10,000,000 at 18% over 24 months
    let application = CreditApplication::builder()
        .applicant_name("Juan Esteban")
        .monthly_income(Money::from_major(3_000_000))
        .active_loan_count(1)
        .credit_score(800)
        .requested_amount(Money::from_major(10_000_000))
        .build();

    let rate = Rate::from_percentage(dec!(18));

    let decision = application.decision(rate, 24)?;
    println!("{}", serde_json::to_string_pretty(&decision)?);

    let plan = application.installment_plan(rate, 24)?;
    println!(
        "total interest over {} months: {}",
        plan.term_months,
        plan.total_interest.round_dp(2)
    );

    // same profile but a second active loan falls through to rejection
    let overextended = application.with_active_loan_count(2);
    let decision = overextended.decision(rate, 24)?;
    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(())
}
