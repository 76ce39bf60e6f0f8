//! Property-based tests for the budget engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::BudgetEngine;
use super::limits::{MAX_PERCENT, MAX_QUANTITY, MAX_UNIT_PRICE};
use super::tax::TaxConfig;
use super::types::{Category, Item, ItemType, Project};

fn arb_item() -> impl Strategy<Value = Item> {
    (
        any::<bool>(),
        0i64..10_000,
        0i64..100_000_000,
        proptest::option::of(0i64..200),
    )
        .prop_map(|(is_labor, quantity, unit_price, margin)| {
            let item_type = if is_labor {
                ItemType::Jasa
            } else {
                ItemType::Perangkat
            };
            let mut item = Item::new("Item", "Unit", item_type)
                .priced(Decimal::from(quantity), Decimal::from(unit_price));
            item.margin = margin.map(Decimal::from);
            item
        })
}

fn arb_project() -> impl Strategy<Value = Project> {
    proptest::collection::vec(proptest::collection::vec(arb_item(), 0..6), 0..5).prop_map(
        |categories| {
            let mut project = Project::new("Generated");
            project.categories = categories
                .into_iter()
                .enumerate()
                .map(|(i, items)| {
                    let mut category = Category::new(format!("Kategori {i}"));
                    category.items = items;
                    category
                })
                .collect();
            project
        },
    )
}

fn arb_tax() -> impl Strategy<Value = TaxConfig> {
    (any::<bool>(), 0i64..25, any::<bool>(), 0i64..10, 0i64..30).prop_map(
        |(include_vat, vat, include_withholding, withholding, contingency)| TaxConfig {
            include_vat,
            vat_rate: Decimal::from(vat),
            include_withholding,
            withholding_rate: Decimal::from(withholding),
            contingency_rate: Decimal::from(contingency),
        },
    )
}

/// Items inside the accepted bounds with a non-negative selling price.
fn arb_item_within_limits() -> impl Strategy<Value = Item> {
    (
        any::<bool>(),
        0i64..=1_000_000_000,
        0i64..=1_000_000_000_000_000,
        -100i64..=1000,
        0u32..=4,
    )
        .prop_map(|(is_labor, quantity, unit_price, margin, scale)| {
            let item_type = if is_labor {
                ItemType::Jasa
            } else {
                ItemType::Perangkat
            };
            Item::new("Item", "Unit", item_type)
                .priced(
                    Decimal::new(quantity, scale),
                    Decimal::new(unit_price, scale),
                )
                .with_margin(Decimal::new(margin, 0))
        })
}

fn arb_tax_within_limits() -> impl Strategy<Value = TaxConfig> {
    (0i64..=1000, 0i64..=1000, 0i64..=1000).prop_map(|(vat, withholding, contingency)| TaxConfig {
        include_vat: true,
        vat_rate: Decimal::from(vat),
        include_withholding: true,
        withholding_rate: Decimal::from(withholding),
        contingency_rate: Decimal::from(contingency),
    })
}

proptest! {
    /// A line without markup sells at cost.
    #[test]
    fn test_zero_margin_sells_at_cost(item in arb_item()) {
        let mut item = item;
        item.margin = Some(Decimal::ZERO);
        prop_assert_eq!(BudgetEngine::selling_price(&item), item.unit_price);
        prop_assert_eq!(BudgetEngine::item_profit(&item), Decimal::ZERO);
    }

    /// item_total == quantity * unit_price * (1 + margin / 100)
    #[test]
    fn test_item_total_formula(item in arb_item()) {
        let margin = item.margin.unwrap_or_default();
        let expected = item.quantity * item.unit_price * (dec!(1) + margin / dec!(100));
        prop_assert_eq!(BudgetEngine::item_total(&item), expected);
    }

    /// Each category subtotal only sees its own items.
    #[test]
    fn test_category_subtotals_do_not_leak(project in arb_project(), tax in arb_tax()) {
        let summary = BudgetEngine::summarize(&project, &tax);

        prop_assert_eq!(summary.category_subtotals.len(), project.categories.len());
        for (category, subtotal) in project.categories.iter().zip(&summary.category_subtotals) {
            let expected: Decimal = category.items.iter().map(BudgetEngine::item_total).sum();
            prop_assert_eq!(subtotal.category_id, category.id);
            prop_assert_eq!(subtotal.subtotal, expected);
        }

        let sum_of_categories: Decimal = summary.category_subtotals.iter().map(|c| c.subtotal).sum();
        prop_assert_eq!(sum_of_categories, summary.subtotal);
    }

    /// Goods and labor partition every item.
    #[test]
    fn test_buckets_partition_items(project in arb_project(), tax in arb_tax()) {
        let summary = BudgetEngine::summarize(&project, &tax);

        let goods: Decimal = project.categories.iter()
            .flat_map(|c| &c.items)
            .filter(|i| i.item_type == ItemType::Perangkat)
            .map(BudgetEngine::item_total)
            .sum();
        let labor: Decimal = project.categories.iter()
            .flat_map(|c| &c.items)
            .filter(|i| i.item_type == ItemType::Jasa)
            .map(BudgetEngine::item_total)
            .sum();

        prop_assert_eq!(summary.total_goods, goods);
        prop_assert_eq!(summary.total_labor, labor);
        prop_assert_eq!(summary.subtotal, summary.total_goods + summary.total_labor);
        prop_assert_eq!(summary.gross_profit, summary.subtotal - summary.total_cost);
    }

    /// grand_total == subtotal * (1 + c/100) * (1 + v/100 if VAT)
    #[test]
    fn test_grand_total_identity(project in arb_project(), tax in arb_tax()) {
        let summary = BudgetEngine::summarize(&project, &tax);

        let contingency_factor = dec!(1) + tax.contingency_rate / dec!(100);
        let vat_factor = if tax.include_vat {
            dec!(1) + tax.vat_rate / dec!(100)
        } else {
            dec!(1)
        };
        prop_assert_eq!(summary.grand_total, summary.subtotal * contingency_factor * vat_factor);
    }

    /// Without VAT the grand total is the pre-tax base.
    #[test]
    fn test_vat_disabled(project in arb_project(), tax in arb_tax()) {
        let summary = BudgetEngine::summarize(&project, &tax.with_vat(false));
        prop_assert_eq!(summary.vat_amount, Decimal::ZERO);
        prop_assert_eq!(summary.grand_total, summary.base_before_tax);
    }

    /// Withholding only moves the net-to-vendor figure.
    #[test]
    fn test_withholding_never_touches_grand_total(project in arb_project(), tax in arb_tax()) {
        let with = BudgetEngine::summarize(&project, &tax.with_withholding(true));
        let without = BudgetEngine::summarize(&project, &tax.with_withholding(false));

        prop_assert_eq!(with.grand_total, without.grand_total);
        prop_assert_eq!(with.vat_amount, without.vat_amount);
        prop_assert_eq!(without.withholding_amount, Decimal::ZERO);
        prop_assert_eq!(without.net_to_labor_vendors, without.total_labor);
        prop_assert_eq!(
            with.net_to_labor_vendors,
            with.total_labor - with.total_labor * tax.withholding_rate / dec!(100)
        );
    }

    /// Same input, same output.
    #[test]
    fn test_summarize_is_idempotent(project in arb_project(), tax in arb_tax()) {
        let first = BudgetEngine::summarize(&project, &tax);
        let second = BudgetEngine::summarize(&project, &tax);
        prop_assert_eq!(first, second);
    }

    /// Reordering categories changes nothing but the order of subtotals.
    #[test]
    fn test_category_order_does_not_change_totals(project in arb_project(), tax in arb_tax()) {
        let mut reversed = project.clone();
        reversed.categories.reverse();

        let a = BudgetEngine::summarize(&project, &tax);
        let b = BudgetEngine::summarize(&reversed, &tax);
        prop_assert_eq!(a.grand_total, b.grand_total);
        prop_assert_eq!(a.total_cost, b.total_cost);
        prop_assert_eq!(a.withholding_amount, b.withholding_amount);
    }

    #[test]
    fn test_bounded_input_never_saturates(
        items in proptest::collection::vec(arb_item_within_limits(), 0..8),
        tax in arb_tax_within_limits(),
    ) {
        let mut project = Project::new("Batas");
        project.categories.push(Category { items, ..Category::new("Semua") });

        let summary = BudgetEngine::summarize(&project, &tax);

        prop_assert!(summary.grand_total < Decimal::MAX);
        prop_assert!(summary.total_cost < Decimal::MAX);
        prop_assert!(summary.base_before_tax >= summary.subtotal);
        prop_assert!(summary.grand_total >= summary.base_before_tax);
        prop_assert!(summary.withholding_amount <= summary.total_labor * dec!(10));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn reference_project() -> Project {
        let mut project = Project::new("Instalasi Jaringan");
        project.categories.push(
            Category::new("Perangkat Utama")
                .with_item(
                    Item::new("Switch 24 Port", "Unit", ItemType::Perangkat)
                        .priced(dec!(2), dec!(100000))
                        .with_margin(dec!(10)),
                )
                .with_item(
                    Item::new("Jasa Tarik Kabel", "Lot", ItemType::Jasa)
                        .priced(dec!(1), dec!(500000))
                        .with_margin(dec!(0)),
                ),
        );
        project
    }

    #[test]
    fn test_reference_scenario() {
        let project = reference_project();
        let summary = BudgetEngine::summarize(&project, &TaxConfig::default());

        assert_eq!(summary.total_goods, dec!(220000));
        assert_eq!(summary.total_labor, dec!(500000));
        assert_eq!(summary.subtotal, dec!(720000));
        assert_eq!(summary.total_cost, dec!(700000));
        assert_eq!(summary.gross_profit, dec!(20000));
        assert_eq!(summary.contingency_amount, dec!(36000));
        assert_eq!(summary.base_before_tax, dec!(756000));
        assert_eq!(summary.vat_amount, dec!(83160));
        assert_eq!(summary.grand_total, dec!(839160));
        assert_eq!(summary.withholding_amount, dec!(10000));
        assert_eq!(summary.net_to_labor_vendors, dec!(490000));
        assert_eq!(summary.category_subtotals[0].subtotal, dec!(720000));
    }

    #[test]
    fn test_reference_scenario_without_withholding() {
        let project = reference_project();
        let summary =
            BudgetEngine::summarize(&project, &TaxConfig::default().with_withholding(false));

        assert_eq!(summary.grand_total, dec!(839160));
        assert_eq!(summary.withholding_amount, dec!(0));
        assert_eq!(summary.net_to_labor_vendors, dec!(500000));
    }

    #[test]
    fn test_empty_project_is_all_zero() {
        let project = Project::new("Kosong");
        let summary = BudgetEngine::summarize(&project, &TaxConfig::default());

        assert_eq!(summary.total_goods, Decimal::ZERO);
        assert_eq!(summary.total_labor, Decimal::ZERO);
        assert_eq!(summary.total_cost, Decimal::ZERO);
        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.gross_profit, Decimal::ZERO);
        assert_eq!(summary.contingency_amount, Decimal::ZERO);
        assert_eq!(summary.base_before_tax, Decimal::ZERO);
        assert_eq!(summary.vat_amount, Decimal::ZERO);
        assert_eq!(summary.withholding_amount, Decimal::ZERO);
        assert_eq!(summary.net_to_labor_vendors, Decimal::ZERO);
        assert_eq!(summary.grand_total, Decimal::ZERO);
        assert!(summary.category_subtotals.is_empty());
    }

    #[test]
    fn test_empty_category_has_zero_subtotal() {
        let mut project = reference_project();
        project.categories.push(Category::new("Mobilisasi & Alat Kerja"));

        let summary = BudgetEngine::summarize(&project, &TaxConfig::default());

        assert_eq!(summary.category_subtotals.len(), 2);
        assert_eq!(summary.category_subtotals[1].subtotal, Decimal::ZERO);
        assert_eq!(summary.grand_total, dec!(839160));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let project = reference_project();
        let before = project.clone();
        let _ = BudgetEngine::summarize(&project, &TaxConfig::default());
        assert_eq!(project, before);
    }

    #[test]
    fn test_largest_accepted_item_is_exact() {
        let mut project = Project::new("Batas Atas");
        project.categories.push(
            Category::new("Perangkat").with_item(
                Item::new("Turbin", "Unit", ItemType::Jasa)
                    .priced(MAX_QUANTITY, MAX_UNIT_PRICE)
                    .with_margin(MAX_PERCENT),
            ),
        );
        let tax = TaxConfig {
            include_vat: true,
            vat_rate: MAX_PERCENT,
            include_withholding: true,
            withholding_rate: MAX_PERCENT,
            contingency_rate: MAX_PERCENT,
        };

        let summary = BudgetEngine::summarize(&project, &tax);

        assert_eq!(summary.total_labor, dec!(11e24));
        assert_eq!(summary.total_cost, dec!(1e24));
        assert_eq!(summary.contingency_amount, dec!(11e25));
        assert_eq!(summary.base_before_tax, dec!(121e24));
        assert_eq!(summary.vat_amount, dec!(121e25));
        assert_eq!(summary.grand_total, dec!(1331e24));
        assert_eq!(summary.withholding_amount, dec!(11e25));
        assert_eq!(summary.net_to_labor_vendors, dec!(-99e24));
    }
}
