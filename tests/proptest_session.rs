//! Property tests over the session state machines.

use arc_console::model::{Asset, AssetId, FieldId, FilterCategory, RiskRating};
use arc_console::session::{
    AssetStepper, FieldEditor, PortfolioFilters, SelectionSet, SummaryModel, MAX_SELECTED,
};
use proptest::prelude::*;

fn arb_asset_id() -> impl Strategy<Value = u32> {
    1u32..20
}

fn make_asset(id: u32) -> Asset {
    Asset::new(
        id,
        format!("{id} Example Street, Toronto, ON"),
        "Office Tower",
        "$10M",
        RiskRating::Medium,
    )
}

fn arb_category() -> impl Strategy<Value = FilterCategory> {
    prop::sample::select(FilterCategory::ALL.to_vec())
}

fn arb_value() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "toronto".to_string(),
        "montreal".to_string(),
        "office".to_string(),
        "retail".to_string(),
        "oil".to_string(),
        "leed-gold".to_string(),
    ])
}

proptest! {
    /// The selection never exceeds its capacity and never holds the same
    /// asset twice, under any interleaving of selects and removes.
    #[test]
    fn selection_bounded_and_unique(ops in prop::collection::vec((arb_asset_id(), any::<bool>()), 0..60)) {
        let mut selection = SelectionSet::new();
        for (id, is_select) in ops {
            if is_select {
                selection.select(make_asset(id));
            } else {
                selection.remove(AssetId(id));
            }

            prop_assert!(selection.len() <= MAX_SELECTED);
            let mut ids: Vec<u32> = selection.list().iter().map(|a| a.id.0).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), selection.len());
        }
    }

    /// Toggling the same option twice always returns the filters to their
    /// prior state.
    #[test]
    fn filter_toggle_is_self_inverse(
        setup in prop::collection::vec((arb_category(), arb_value()), 0..10),
        category in arb_category(),
        value in arb_value(),
    ) {
        let mut filters = PortfolioFilters::new();
        for (c, v) in setup {
            filters.toggle(c, v);
        }
        let before: Vec<(FilterCategory, String)> = filters
            .all_selected()
            .into_iter()
            .map(|(c, v)| (c, v.to_string()))
            .collect();

        filters.toggle(category, value.clone());
        filters.toggle(category, value);

        let after: Vec<(FilterCategory, String)> = filters
            .all_selected()
            .into_iter()
            .map(|(c, v)| (c, v.to_string()))
            .collect();
        prop_assert_eq!(before, after);
    }

    /// The derived summary shrinks monotonically as filters accumulate and
    /// never leaves its floors.
    #[test]
    fn summary_is_monotonic_in_filter_count(n in 0usize..40) {
        let model = SummaryModel::default();
        let current = model.summarize(n);
        let next = model.summarize(n + 1);

        prop_assert!(next.assets_match <= current.assets_match);
        prop_assert!(next.total_value_billions <= current.total_value_billions);
        prop_assert!(next.low_risk_pct <= current.low_risk_pct);
        prop_assert!(next.high_risk_pct >= current.high_risk_pct);
        prop_assert!(current.total_value_billions >= 0.0);
        prop_assert!(current.low_risk_pct <= 100);
        prop_assert!(current.high_risk_pct <= 100);
    }

    /// The stepper cursor stays within [1, total] under any op sequence.
    #[test]
    fn stepper_cursor_stays_in_range(
        total in 1usize..8,
        ops in prop::collection::vec(0u8..3, 0..40),
        jumps in prop::collection::vec(0usize..12, 0..10),
    ) {
        let mut stepper = AssetStepper::new(total);
        let mut jump_iter = jumps.into_iter();
        for op in ops {
            match op {
                0 => stepper.advance(),
                1 => stepper.retreat(),
                _ => {
                    if let Some(k) = jump_iter.next() {
                        stepper.jump_to(k);
                    }
                }
            }
            prop_assert!(stepper.cursor() >= 1);
            prop_assert!(stepper.cursor() <= stepper.total());
        }
    }

    /// Cancel always restores the committed value; save always commits the
    /// draft verbatim.
    #[test]
    fn editor_save_and_cancel_laws(draft in "[ -~]{0,40}") {
        let mut editor = FieldEditor::new(arc_console::model::fixtures::asset_record());
        let original = editor.record().value(FieldId::Company).to_string();

        editor.start_edit(FieldId::Company);
        editor.set_draft(draft.clone());
        editor.cancel();
        prop_assert_eq!(editor.record().value(FieldId::Company), &original);

        editor.start_edit(FieldId::Company);
        editor.set_draft(draft.clone());
        editor.save();
        prop_assert_eq!(editor.record().value(FieldId::Company), &draft);
    }
}
