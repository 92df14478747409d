//! Aggregation Tests
//!
//! Group totals must partition the dataset: summing every group gives the
//! global totals, whatever the grouping key.

use cleanup_cost_core::{
    analysis_rows, group_by, group_by_country, AnnotatedEvent, CleanupEvent, CostBreakdown,
    CostModel, Costed, GroupTotals, Table,
};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

#[test]
fn test_group_by_country_from_table() {
    let table = Table::parse(
        "Country,People,Pounds,Miles,# of bags\n\
         Kenya,10,200,1,1\n\
         Kenya,5,50,1,1\n\
         Peru,1,1,0.1,1\n\
         ,2,2,0.1,1\n",
    )
    .unwrap();
    let rows = analysis_rows(&table, &CostModel::default()).unwrap();
    let groups = group_by_country(&rows);

    assert_eq!(groups.len(), 3);
    let kenya = groups.get("Kenya").unwrap();
    assert_eq!(kenya.events, 2);
    assert_eq!(kenya.people, 15);
    assert!(close(kenya.pounds, 250.0));
    assert!(groups.get("Unknown").is_some());

    // Only Kenya passes the 100 lb floor
    let efficient = groups.most_efficient(100.0, 10);
    assert_eq!(efficient.len(), 1);
    assert_eq!(efficient[0].0, "Kenya");

    let ranked = groups.rank_by_total_cost(1);
    assert_eq!(ranked[0].0, "Kenya");
}

#[test]
fn test_country_table_export() {
    let table = Table::parse("Country,People,Pounds,Miles,# of bags\nFiji,2,4,1,1\n").unwrap();
    let rows = analysis_rows(&table, &CostModel::default()).unwrap();
    let export = group_by_country(&rows).to_table("Country").unwrap();

    assert_eq!(export.len(), 1);
    assert_eq!(export.column("Country").unwrap(), vec!["Fiji"]);
    assert_eq!(export.column("events").unwrap(), vec!["1"]);
    let total: f64 = export.column("total_cost").unwrap()[0].parse().unwrap();
    assert!((total - rows[0].costs.total_cost).abs() <= 0.005);
}

/// Annotated event tagged with an arbitrary group key
struct Keyed {
    key: u8,
    item: AnnotatedEvent,
}

impl Costed for Keyed {
    fn event(&self) -> CleanupEvent {
        self.item.event
    }

    fn costs(&self) -> &CostBreakdown {
        &self.item.costs
    }
}

fn events_strategy() -> impl Strategy<Value = Vec<(CleanupEvent, u8)>> {
    prop::collection::vec(
        (0u32..200, 0.0f64..1000.0, 0.0f64..10.0, 0u32..30, 0u8..6).prop_map(
            |(people, pounds, miles, bags, key)| (CleanupEvent::new(people, pounds, miles, bags), key),
        ),
        0..60,
    )
}

proptest! {
    #[test]
    fn prop_group_totals_sum_to_global(items in events_strategy()) {
        let model = CostModel::default();
        let events: Vec<CleanupEvent> = items.iter().map(|(e, _)| *e).collect();
        let annotated = model.annotate(&events);
        let keyed: Vec<Keyed> = annotated
            .iter()
            .zip(&items)
            .map(|(item, (_, key))| Keyed { key: *key, item: *item })
            .collect();

        let groups = group_by(&keyed, |k| format!("g{}", k.key));
        let global = GroupTotals::from_items(&annotated);
        let summed = groups.overall();

        prop_assert_eq!(summed.events, events.len());
        prop_assert_eq!(summed.people, global.people);
        prop_assert!(close(summed.pounds, global.pounds));
        prop_assert!(close(summed.total_cost, global.total_cost));
        prop_assert!(close(summed.volunteer_cost, global.volunteer_cost));
        prop_assert!(close(summed.carbon_cost, global.carbon_cost));
    }

    #[test]
    fn prop_group_ratios_are_finite(items in events_strategy()) {
        let annotated = CostModel::default().annotate(
            &items.iter().map(|(e, _)| *e).collect::<Vec<_>>(),
        );
        let totals = GroupTotals::from_items(&annotated);
        prop_assert!(totals.cost_per_person().is_finite());
        prop_assert!(totals.cost_per_pound().is_finite());
        prop_assert!(totals.pounds_per_hour().is_finite());
        prop_assert!(totals.cost_per_event().is_finite());
    }
}
