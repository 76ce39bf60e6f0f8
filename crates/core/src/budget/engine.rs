//! Budget engine: turns a category tree into a taxed, margin-adjusted total.
//!
//! All arithmetic saturates at `Decimal::MIN`/`Decimal::MAX` instead of
//! panicking. Input that passed the checks in [`super::limits`] never gets
//! near saturation for realistic projects, so the totals stay exact there.

use rust_decimal::Decimal;

use super::tax::TaxConfig;
use super::types::{BudgetSummary, Category, CategorySubtotal, Item, ItemType, Project};

const fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative() != b.is_sign_negative()))
}

fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or_else(|| saturated(b.is_sign_negative()))
}

fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b)
        .unwrap_or_else(|| saturated(b.is_sign_positive()))
}

/// `value * rate / 100`
fn percent_of(value: Decimal, rate: Decimal) -> Decimal {
    mul(value, rate / Decimal::ONE_HUNDRED)
}

/// Pure calculation over a project snapshot. Holds no state.
pub struct BudgetEngine;

impl BudgetEngine {
    /// Selling price per unit: `unit_price * (1 + margin / 100)`.
    ///
    /// This is the only place where a missing margin is read as 0.
    #[must_use]
    pub fn selling_price(item: &Item) -> Decimal {
        let margin = item.margin.unwrap_or(Decimal::ZERO);
        mul(
            item.unit_price,
            add(Decimal::ONE, margin / Decimal::ONE_HUNDRED),
        )
    }

    /// Revenue for the line: `quantity * selling_price`.
    #[must_use]
    pub fn item_total(item: &Item) -> Decimal {
        mul(item.quantity, Self::selling_price(item))
    }

    /// Cost basis for the line: `quantity * unit_price`.
    #[must_use]
    pub fn item_cost(item: &Item) -> Decimal {
        mul(item.quantity, item.unit_price)
    }

    /// Markup earned on the line.
    #[must_use]
    pub fn item_profit(item: &Item) -> Decimal {
        sub(Self::item_total(item), Self::item_cost(item))
    }

    /// Sum of item totals in one category.
    #[must_use]
    pub fn category_subtotal(category: &Category) -> Decimal {
        category
            .items
            .iter()
            .map(Self::item_total)
            .fold(Decimal::ZERO, add)
    }

    /// Summarizes a project under the given tax settings.
    ///
    /// Ordering of the tax pipeline:
    /// - contingency is taken on the subtotal,
    /// - PPN is taken on subtotal + contingency,
    /// - PPh 23 is taken on the labor bucket only and never enters the grand
    ///   total; it only reduces `net_to_labor_vendors`.
    #[must_use]
    pub fn summarize(project: &Project, tax: &TaxConfig) -> BudgetSummary {
        let mut total_goods = Decimal::ZERO;
        let mut total_labor = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;
        let mut category_subtotals = Vec::with_capacity(project.categories.len());

        for category in &project.categories {
            let mut subtotal = Decimal::ZERO;
            for item in &category.items {
                let line_total = Self::item_total(item);
                match item.item_type {
                    ItemType::Perangkat => total_goods = add(total_goods, line_total),
                    ItemType::Jasa => total_labor = add(total_labor, line_total),
                }
                total_cost = add(total_cost, Self::item_cost(item));
                subtotal = add(subtotal, line_total);
            }
            category_subtotals.push(CategorySubtotal {
                category_id: category.id,
                name: category.name.clone(),
                subtotal,
            });
        }

        let subtotal = add(total_goods, total_labor);
        let gross_profit = sub(subtotal, total_cost);
        let contingency_amount = percent_of(subtotal, tax.contingency_rate);
        let base_before_tax = add(subtotal, contingency_amount);

        let vat_amount = if tax.include_vat {
            percent_of(base_before_tax, tax.vat_rate)
        } else {
            Decimal::ZERO
        };

        let withholding_amount = if tax.include_withholding {
            percent_of(total_labor, tax.withholding_rate)
        } else {
            Decimal::ZERO
        };

        BudgetSummary {
            total_goods,
            total_labor,
            total_cost,
            subtotal,
            gross_profit,
            contingency_amount,
            base_before_tax,
            vat_amount,
            withholding_amount,
            grand_total: add(base_before_tax, vat_amount),
            net_to_labor_vendors: sub(total_labor, withholding_amount),
            category_subtotals,
        }
    }
}
