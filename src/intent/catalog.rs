use super::rules::{evaluate, SlotCheck, SlotRule, ValidationOutcome};
use super::types::IntentKind;
use crate::kernel::error::HookError;
use crate::kernel::event::SlotSet;

pub const BEVERAGE_TYPE: &str = "BeverageType";
pub const BEVERAGE_SIZE: &str = "BeverageSize";
pub const BEVERAGE_TEMP: &str = "BeverageTemp";

pub const LOAN_AMOUNT: &str = "LoanAmount";
pub const TENURE: &str = "Tenure";
pub const GROSS_INCOME: &str = "GrossIncome";

// Only one drink on the menu for now.
const SUPPORTED_BEVERAGE: &str = "mocha";
const BEVERAGE_SIZES: &str = "short|tall|grande|venti|small|medium|large";
const BEVERAGE_TEMPS: &str = "kids|hot|iced";

const BEVERAGE_DONE: &str =
    "Great! Your mocha will be available for pickup soon. Thanks for using CoffeeBot!";
const LOAN_DONE: &str = "Great! Your loan application will be processed and you will be \
                         informed very soon. Thanks for using Jack Sparrow!";
const HELP_DONE: &str = "Welcome to Jack Sparrow loan assistant. How can I help you?";

/// Ordered rule lists for every known intent, compiled once.
#[derive(Debug, Clone)]
pub struct Catalog {
    order_beverage: Vec<SlotRule>,
    apply_loan: Vec<SlotRule>,
    help: Vec<SlotRule>,
}

impl Catalog {
    pub fn new() -> Result<Self, HookError> {
        let order_beverage = vec![
            SlotRule::new(BEVERAGE_TYPE, SlotCheck::Exactly(SUPPORTED_BEVERAGE)).with_message(
                "Sorry, but we can only make a mocha today. What kind of beverage would you like?",
            ),
            SlotRule::new(BEVERAGE_SIZE, SlotCheck::matches(BEVERAGE_SIZES, BEVERAGE_SIZE)?),
            SlotRule::new(BEVERAGE_TEMP, SlotCheck::matches(BEVERAGE_TEMPS, BEVERAGE_TEMP)?),
        ];

        let apply_loan = vec![
            SlotRule::new(LOAN_AMOUNT, SlotCheck::PositiveNumber).with_message(
                "Sorry, but loan amount must be more than zero. \
                 How much of loan amount would you like?",
            ),
            SlotRule::new(TENURE, SlotCheck::PositiveNumber).with_message(
                "Sorry, but tenure must be more than zero. How long of tenure would you like?",
            ),
            SlotRule::new(GROSS_INCOME, SlotCheck::PositiveNumber).with_message(
                "Sorry, but gross income must be more than zero. \
                 How much is your monthly gross income?",
            ),
        ];

        Ok(Self {
            order_beverage,
            apply_loan,
            help: Vec::new(),
        })
    }

    pub fn rules_for(&self, intent: IntentKind) -> &[SlotRule] {
        match intent {
            IntentKind::OrderBeverage => &self.order_beverage,
            IntentKind::ApplyLoan => &self.apply_loan,
            IntentKind::Help => &self.help,
        }
    }

    pub fn completion_for(&self, intent: IntentKind) -> &'static str {
        match intent {
            IntentKind::OrderBeverage => BEVERAGE_DONE,
            IntentKind::ApplyLoan => LOAN_DONE,
            IntentKind::Help => HELP_DONE,
        }
    }

    pub fn validate(&self, intent: IntentKind, slots: &SlotSet) -> ValidationOutcome {
        evaluate(self.rules_for(intent), slots)
    }
}
