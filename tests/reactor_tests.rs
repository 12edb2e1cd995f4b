use codehook::kernel::directive::{DialogAction, FulfillmentState};
use codehook::kernel::event::{DialogRequest, InvocationPhase};
use codehook::{HookError, Reactor};

const BEVERAGE: &str = "cafeOrderBeverageIntent";
const LOAN: &str = "fiuApplyLoanIntent";
const HELP: &str = "fiuHelpIntent";

fn with_session(request: DialogRequest) -> DialogRequest {
    request
        .with_session_attribute("visits", "3")
        .with_session_attribute("channel", "web")
}

fn beverage(kind: &str) -> DialogRequest {
    with_session(DialogRequest::new(InvocationPhase::Collecting, BEVERAGE, "user-1"))
        .with_slot("BeverageType", Some(kind))
        .with_slot("BeverageSize", Some("tall"))
        .with_slot("BeverageTemp", Some("hot"))
}

#[test]
fn test_valid_beverage_delegates_with_same_slots() {
    let reactor = Reactor::new().unwrap();
    let request = beverage("mocha");

    let directive = reactor.respond(&request).unwrap();
    match &directive.dialog_action {
        DialogAction::Delegate { slots } => assert_eq!(slots, &request.slots),
        other => panic!("Expected Delegate, got {:?}", other),
    }
    assert_eq!(directive.session_attributes, request.session_attributes);
}

#[test]
fn test_unsupported_beverage_elicits_type() {
    let reactor = Reactor::new().unwrap();
    let request = beverage("latte");

    let directive = reactor.respond(&request).unwrap();
    match &directive.dialog_action {
        DialogAction::ElicitSlot { intent_name, slots, slot_to_elicit, message, .. } => {
            assert_eq!(intent_name, BEVERAGE);
            assert_eq!(slot_to_elicit, "BeverageType");
            assert_eq!(slots, &request.slots, "Slots must be forwarded untouched");
            assert!(message.is_some());
        }
        other => panic!("Expected ElicitSlot, got {:?}", other),
    }
    assert_eq!(directive.session_attributes, request.session_attributes);
}

#[test]
fn test_negative_loan_amount_elicits_amount_first() {
    let reactor = Reactor::new().unwrap();
    let request = DialogRequest::new(InvocationPhase::Collecting, LOAN, "user-2")
        .with_slot("LoanAmount", Some("-5"))
        .with_slot("Tenure", Some("12"))
        .with_slot("GrossIncome", Some("3000"))
        .with_slot("FullName", Some("Jack Sparrow"));

    let directive = reactor.respond(&request).unwrap();
    match &directive.dialog_action {
        DialogAction::ElicitSlot { slot_to_elicit, message, .. } => {
            assert_eq!(slot_to_elicit, "LoanAmount");
            let message = message.as_ref().expect("LoanAmount has a clarifying prompt");
            assert!(message.content.contains("more than zero"));
        }
        other => panic!("Expected ElicitSlot, got {:?}", other),
    }

    // Later slots invalid too: amount still wins.
    let request = request.with_slot("Tenure", Some("-1")).with_slot("GrossIncome", Some("x"));
    let directive = reactor.respond(&request).unwrap();
    assert!(matches!(
        &directive.dialog_action,
        DialogAction::ElicitSlot { slot_to_elicit, .. } if slot_to_elicit == "LoanAmount"
    ));
}

#[test]
fn test_missing_loan_amount_is_elicited_not_delegated() {
    let reactor = Reactor::new().unwrap();

    let empty = DialogRequest::new(InvocationPhase::Collecting, LOAN, "user-2");
    let directive = reactor.respond(&empty).unwrap();
    assert!(matches!(
        &directive.dialog_action,
        DialogAction::ElicitSlot { slot_to_elicit, .. } if slot_to_elicit == "LoanAmount"
    ));

    let request = empty
        .with_slot("LoanAmount", None)
        .with_slot("Tenure", Some("-1"))
        .with_slot("GrossIncome", Some("3000"));
    let directive = reactor.respond(&request).unwrap();
    match &directive.dialog_action {
        DialogAction::ElicitSlot { slot_to_elicit, message, .. } => {
            assert_eq!(slot_to_elicit, "LoanAmount");
            assert!(message.is_none());
        }
        other => panic!("Expected ElicitSlot for LoanAmount, got {:?}", other),
    }
}

#[test]
fn test_valid_loan_delegates() {
    let reactor = Reactor::new().unwrap();
    let request = with_session(DialogRequest::new(InvocationPhase::Collecting, LOAN, "user-2"))
        .with_slot("LoanAmount", Some("50000"))
        .with_slot("Tenure", Some("24"))
        .with_slot("GrossIncome", Some("4500.75"))
        .with_slot("EmailAddress", None);

    let directive = reactor.respond(&request).unwrap();
    assert_eq!(
        directive.dialog_action,
        DialogAction::Delegate { slots: request.slots.clone() }
    );
    assert_eq!(directive.session_attributes, request.session_attributes);
}

#[test]
fn test_fulfilling_always_closes() {
    let reactor = Reactor::new().unwrap();

    for intent in [BEVERAGE, LOAN, HELP] {
        // Slot contents are irrelevant once fulfilling.
        let request = DialogRequest::new(InvocationPhase::Fulfilling, intent, "user-3");
        let request = with_session(request)
            .with_slot("LoanAmount", Some("-5"))
            .with_slot("BeverageType", Some("latte"));

        let directive = reactor.respond(&request).unwrap();
        match &directive.dialog_action {
            DialogAction::Close { fulfillment_state, message, response_card } => {
                assert_eq!(*fulfillment_state, FulfillmentState::Fulfilled);
                assert!(!message.content.is_empty(), "{} needs completion text", intent);
                assert!(response_card.is_none());
            }
            other => panic!("Expected Close for {}, got {:?}", intent, other),
        }
        assert_eq!(directive.session_attributes, request.session_attributes);
    }
}

#[test]
fn test_unknown_intent_fails_in_both_phases() {
    let reactor = Reactor::new().unwrap();

    for phase in [InvocationPhase::Collecting, InvocationPhase::Fulfilling] {
        let request = DialogRequest::new(phase, "unknownIntent", "user-4");
        match reactor.respond(&request) {
            Err(HookError::UnsupportedIntent { name }) => assert_eq!(name, "unknownIntent"),
            other => panic!("Expected UnsupportedIntent, got {:?}", other),
        }
    }
}

#[test]
fn test_help_collecting_delegates() {
    let reactor = Reactor::new().unwrap();
    let request = DialogRequest::new(InvocationPhase::Collecting, HELP, "user-5");

    let (intent, directive) = reactor.turn(&request).unwrap();
    assert_eq!(intent, codehook::intent::IntentKind::Help);
    assert!(matches!(directive.dialog_action, DialogAction::Delegate { .. }));
}

#[test]
fn test_reactor_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Reactor>();
}
