pub mod amortization;
pub mod application;
pub mod decimal;
pub mod errors;
pub mod policy;

// re-export key types
pub use amortization::{monthly_installment, InstallmentPlan, PlannedPayment};
pub use application::{CreditApplication, CreditApplicationBuilder};
pub use decimal::{Money, Rate};
pub use errors::{EvaluationError, Result};
pub use policy::{CreditTier, Decision};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
