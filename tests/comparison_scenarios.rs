//! End-to-end comparisons through the public API.
//!
//! Covers the engine directly and a decision session driven through the
//! edit handler, the way a front end would use it.

use std::sync::Arc;

use uuid::Uuid;

use choice_compare::adapters::SequentialIdGenerator;
use choice_compare::application::{EditDecisionCommand, EditDecisionHandler};
use choice_compare::domain::analysis::{ComparisonEngine, DeltaFilter, Side, Verdict};
use choice_compare::domain::dashboard::ComparisonOverview;
use choice_compare::domain::decision::{
    Constraint, ConstraintKind, ConstraintPatch, DecisionOption, DecisionSession, Dimension,
    Impact, ImpactPatch,
};
use choice_compare::domain::foundation::{ConstraintId, ImpactId, OptionId};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn option_id(n: u128) -> OptionId {
    OptionId::from_uuid(Uuid::from_u128(n))
}

fn option(n: u128, title: &str, impacts: &[(Dimension, f64)]) -> DecisionOption {
    let impacts = impacts
        .iter()
        .enumerate()
        .map(|(i, (dimension, value))| {
            Impact::with_values(
                ImpactId::from_uuid(Uuid::from_u128(n * 100 + i as u128)),
                *dimension,
                *value,
                "",
            )
        })
        .collect();
    DecisionOption::with_impacts(option_id(n), title, impacts)
}

fn coffee_options() -> Vec<DecisionOption> {
    vec![
        option(1, "Cafe", &[(Dimension::Money, -25.0)]),
        option(2, "Home", &[(Dimension::Money, -5.0), (Dimension::Time, 10.0)]),
    ]
}

// =============================================================================
// Engine
// =============================================================================

#[test]
fn coffee_scenario_scores_and_trade_offs() {
    let result = ComparisonEngine::compare(&coffee_options(), &[]).unwrap();

    assert_eq!(result.a.total, -25.0);
    assert_eq!(result.b.total, 5.0);

    let deltas: Vec<(Dimension, f64)> = result.deltas.iter().map(|d| (d.dimension, d.delta)).collect();
    assert_eq!(deltas, vec![(Dimension::Money, 20.0), (Dimension::Time, 10.0)]);

    let sacrifice_a = result.sacrifice(Side::A).unwrap();
    assert_eq!((sacrifice_a.dimension, sacrifice_a.value), (Dimension::Money, -25.0));
    let sacrifice_b = result.sacrifice(Side::B).unwrap();
    assert_eq!((sacrifice_b.dimension, sacrifice_b.value), (Dimension::Money, -5.0));

    assert!(!result.is_close_call);
    assert!(result.has_extreme_sacrifice);
}

#[test]
fn hard_constraint_disqualifies_only_the_failing_option() {
    let constraint = Constraint::hard(ConstraintId::from_uuid(Uuid::from_u128(900)), "Walkable")
        .with_check(option_id(1), false);

    let result = ComparisonEngine::compare(&coffee_options(), &[constraint]).unwrap();

    assert!(result.a.is_disqualified);
    assert_eq!(result.a.violations.len(), 1);
    assert_eq!(result.a.violations[0].kind, ConstraintKind::Hard);
    assert_eq!(result.a.violations[0].penalty, 0.0);
    assert_eq!(result.a.total, -25.0);

    assert!(!result.b.is_disqualified);
    assert!(result.b.violations.is_empty());
    assert_eq!(result.b.total, 5.0);

    assert_eq!(Verdict::from_result(&result), Verdict::Disqualified { side: Side::A });
}

#[test]
fn fewer_than_two_options_is_not_comparable() {
    assert!(ComparisonEngine::compare(&[], &[]).is_none());
    assert!(ComparisonEngine::compare(&coffee_options()[..1], &[]).is_none());
}

#[test]
fn options_past_the_second_are_ignored() {
    let mut options = coffee_options();
    options.push(option(3, "Tea", &[(Dimension::Peace, 50.0)]));

    let with_third = ComparisonEngine::compare(&options, &[]).unwrap();
    let without = ComparisonEngine::compare(&options[..2], &[]).unwrap();
    assert_eq!(with_third, without);
}

#[test]
fn fractional_scores_decide_the_close_call_unrounded() {
    let options = vec![
        option(1, "Stay", &[(Dimension::Money, 0.0)]),
        option(2, "Go", &[(Dimension::Money, 3.4)]),
    ];
    let result = ComparisonEngine::compare(&options, &[]).unwrap();

    assert_eq!(result.a.total, 0.0);
    assert_eq!(result.b.total, 3.4);
    assert!(!result.is_close_call);
    assert_eq!(
        Verdict::from_result(&result),
        Verdict::Leads { side: Side::B, margin: 3.4 }
    );

    let options = vec![
        option(1, "Stay", &[(Dimension::Money, 0.0)]),
        option(2, "Go", &[(Dimension::Money, 2.5)]),
    ];
    assert!(ComparisonEngine::compare(&options, &[]).unwrap().is_close_call);
}

// =============================================================================
// Session driven by commands
// =============================================================================

#[test]
fn editing_session_recomputes_after_every_command() {
    let handler = EditDecisionHandler::new(Arc::new(SequentialIdGenerator::new()));
    let mut session = DecisionSession::new();

    let snapshot = handler
        .handle(&mut session, EditDecisionCommand::AddOption)
        .unwrap();
    let cafe = snapshot.created_option().unwrap();
    assert!(snapshot.result.is_none());

    let home = handler
        .handle(&mut session, EditDecisionCommand::AddOption)
        .unwrap()
        .created_option()
        .unwrap();

    let impact = handler
        .handle(&mut session, EditDecisionCommand::AddImpact { option_id: cafe })
        .unwrap()
        .created_impact()
        .unwrap();
    let snapshot = handler
        .handle(
            &mut session,
            EditDecisionCommand::UpdateImpact {
                option_id: cafe,
                impact_id: impact,
                patch: ImpactPatch::default().dimension(Dimension::Money).value_input("-7.6"),
            },
        )
        .unwrap();
    assert_eq!(snapshot.result.as_ref().unwrap().a.total, -7.6);

    let budget = handler
        .handle(&mut session, EditDecisionCommand::AddConstraint)
        .unwrap()
        .created_constraint()
        .unwrap();
    handler
        .handle(
            &mut session,
            EditDecisionCommand::UpdateConstraint {
                constraint_id: budget,
                patch: ConstraintPatch::default().text("Under budget"),
            },
        )
        .unwrap();
    let snapshot = handler
        .handle(
            &mut session,
            EditDecisionCommand::UpdateConstraintCheck {
                constraint_id: budget,
                option_id: home,
                passed: Some(false),
            },
        )
        .unwrap();
    let result = snapshot.result.unwrap();
    assert_eq!(result.b.total, -10.0);
    assert!(result.is_close_call);

    let snapshot = handler
        .handle(
            &mut session,
            EditDecisionCommand::SetFilterMode {
                mode: DeltaFilter::Positive,
            },
        )
        .unwrap();
    assert_eq!(snapshot.filtered_deltas.len(), 1);
    assert_eq!(snapshot.filtered_deltas[0].delta, 7.6);
    assert_eq!(snapshot.filtered_deltas[0].dimension, Dimension::Money);
}

#[test]
fn removing_an_option_forgets_its_checks() {
    let handler = EditDecisionHandler::new(Arc::new(SequentialIdGenerator::new()));
    let mut session = DecisionSession::new();

    let first = handler
        .handle(&mut session, EditDecisionCommand::AddOption)
        .unwrap()
        .created_option()
        .unwrap();
    handler.handle(&mut session, EditDecisionCommand::AddOption).unwrap();
    let rule = handler
        .handle(&mut session, EditDecisionCommand::AddConstraint)
        .unwrap()
        .created_constraint()
        .unwrap();
    handler
        .handle(
            &mut session,
            EditDecisionCommand::UpdateConstraintCheck {
                constraint_id: rule,
                option_id: first,
                passed: Some(false),
            },
        )
        .unwrap();

    let snapshot = handler
        .handle(&mut session, EditDecisionCommand::RemoveOption { option_id: first })
        .unwrap();

    assert!(snapshot.result.is_none());
    assert_eq!(session.constraint(&rule).unwrap().checks.get(&first), None);
}

#[test]
fn overview_reports_close_call_and_titles() {
    let mut session = DecisionSession::new();
    session.set_context("Weekend plans");
    session.add_option(option_id(1));
    session.add_option(option_id(2));
    session.update_option_title(&option_id(1), "Hike").unwrap();

    let overview = ComparisonOverview::from_session(&session);
    let summary = overview.comparison.unwrap();

    assert_eq!(summary.title_a, "Hike");
    assert_eq!(summary.title_b, "Option 2");
    assert_eq!(summary.verdict, Verdict::Tie);
    assert_eq!(summary.notices.len(), 1);
    assert_eq!(summary.shares.a, 50.0);
}
