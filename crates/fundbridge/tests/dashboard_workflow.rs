use fundbridge::workflows::dashboard::{
    select_dashboard, DashboardRole, DecodedIdentity, StaticIdentity,
};

#[test]
fn startup_founder_sees_startup_cards() {
    let identity = DecodedIdentity::from_json(r#"{"name":"Priya","userType":"STARTUP"}"#)
        .expect("valid claims");
    let view = select_dashboard(&StaticIdentity(Some(identity)));

    assert_eq!(view.role, DashboardRole::Startup);
    assert_eq!(view.greeting(), "Welcome back, Priya!");
    assert!(view.cards.iter().any(|card| card.route == "/schemes"));
}

#[test]
fn investor_is_the_default_dashboard() {
    let identity = DecodedIdentity::from_json(r#"{"name":"Kabir"}"#).expect("valid claims");
    let view = select_dashboard(&StaticIdentity(Some(identity)));

    assert_eq!(view.role, DashboardRole::Investor);
    assert_eq!(view.cards, DashboardRole::Investor.cards());
}

#[test]
fn malformed_claims_are_rejected_before_selection() {
    assert!(DecodedIdentity::from_json("{\"userType\": 7}").is_err());
}
