use tabled::builder::Builder;
use tabled::settings::Style;

use business::domain::purchase::model::Purchase;
use business::domain::purchase::services::filter_by_status;
use business::domain::purchase::value_objects::StatusFilter;

use super::format::{format_date, format_price};
use super::theme::status_dot;

const EMPTY_STATE: &str = "Vázio\nNada por aqui..";

/// Renders the purchase history table.
///
/// The empty state only shows when the user has no purchases at all; a
/// filter with no matches still renders the header-only table.
pub fn render(purchases: &[Purchase], filter: StatusFilter) -> String {
    if purchases.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Compra", "Data", "Total", "Status"]);

    for purchase in filter_by_status(purchases, filter) {
        let status = purchase.status.view();
        builder.push_record([
            format!("Ordem #{}", purchase.id),
            format_date(&purchase.created_at),
            format_price(purchase.price),
            format!("{} {}", status_dot(status.color), status.label),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
