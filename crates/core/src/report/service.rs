//! Report generation service.

use rab_shared::types::Currency;
use rust_decimal::Decimal;

use super::types::{RabReport, RecapKind, RecapLine, ReportAmount, ReportLine, ReportSection};
use crate::budget::{BudgetEngine, BudgetSummary, Project, TaxConfig};

/// Service for laying out RAB reports.
pub struct ReportService;

impl ReportService {
    /// Summarizes the project and lays it out as numbered sections plus a recap.
    ///
    /// Amounts stay exact; only the `display` strings are rounded.
    #[must_use]
    pub fn generate_rab(project: &Project, tax: &TaxConfig, currency: Currency) -> RabReport {
        let summary = BudgetEngine::summarize(project, tax);

        let sections = project
            .categories
            .iter()
            .zip(&summary.category_subtotals)
            .enumerate()
            .map(|(index, (category, subtotal))| {
                let number = index + 1;
                let lines = category
                    .items
                    .iter()
                    .enumerate()
                    .map(|(row, item)| ReportLine {
                        number: format!("{number}.{}", row + 1),
                        name: item.name.clone(),
                        unit: item.unit.clone(),
                        quantity: item.quantity,
                        item_type: item.item_type,
                        unit_price: ReportAmount::new(BudgetEngine::selling_price(item), currency),
                        total: ReportAmount::new(BudgetEngine::item_total(item), currency),
                        vendor_name: item.vendor_name.clone(),
                    })
                    .collect();

                ReportSection {
                    number,
                    name: category.name.clone(),
                    lines,
                    subtotal: ReportAmount::new(subtotal.subtotal, currency),
                }
            })
            .collect();

        let recap = Self::recap(&summary, tax, currency);

        RabReport {
            title: project.title.clone(),
            document: project.document.clone(),
            currency,
            sections,
            recap,
            summary,
        }
    }

    fn recap(summary: &BudgetSummary, tax: &TaxConfig, currency: Currency) -> Vec<RecapLine> {
        let line = |label: String, kind: RecapKind, amount: Decimal| RecapLine {
            label,
            kind,
            amount: ReportAmount::new(amount, currency),
        };

        let mut recap = vec![
            line("Total Perangkat".into(), RecapKind::Line, summary.total_goods),
            line("Total Jasa".into(), RecapKind::Line, summary.total_labor),
            line("Sub Total".into(), RecapKind::Total, summary.subtotal),
            line(
                format!("Contingency ({}%)", format_rate(tax.contingency_rate)),
                RecapKind::Line,
                summary.contingency_amount,
            ),
            line(
                "Total Sebelum Pajak".into(),
                RecapKind::Total,
                summary.base_before_tax,
            ),
        ];

        if tax.include_vat {
            recap.push(line(
                format!("PPN ({}%)", format_rate(tax.vat_rate)),
                RecapKind::Line,
                summary.vat_amount,
            ));
        }

        recap.push(line(
            "Grand Total".into(),
            RecapKind::Total,
            summary.grand_total,
        ));

        if tax.include_withholding {
            recap.push(line(
                format!("PPh 23 ({}%)", format_rate(tax.withholding_rate)),
                RecapKind::Informational,
                summary.withholding_amount,
            ));
            recap.push(line(
                "Diterima Vendor Jasa".into(),
                RecapKind::Informational,
                summary.net_to_labor_vendors,
            ));
        }

        recap
    }
}

/// `2.50` → `2,5`
fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string().replace('.', ",")
}
