use std::fmt::Write;

use tabled::builder::Builder;
use tabled::settings::Style;

use business::domain::purchase::use_cases::get_detail::PurchaseDetailView;

use super::format::{format_date, format_price};
use super::theme::status_dot;

/// Renders the single-purchase detail card: header, resolved line items,
/// stored total, and the pay affordance while the purchase is still open.
pub fn render(view: &PurchaseDetailView) -> String {
    let status = view.status.view();
    let mut out = String::new();

    let _ = writeln!(out, "Nº da compra {}", view.id);
    let _ = writeln!(out, "{}", format_date(&view.created_at));
    let _ = writeln!(out, "{} {}", status_dot(status.color), status.label);

    let mut builder = Builder::default();
    builder.push_record(["Produto", "Qtd", "Subtotal"]);
    for item in &view.items {
        builder.push_record([
            item.name.clone(),
            item.quantity.to_string(),
            format_price(item.line_total),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    let _ = writeln!(out, "{}", table);

    let _ = writeln!(out, "Total {}", format_price(view.stored_total));

    if view.payment_enabled {
        let _ = writeln!(out, "Essa compra ainda nao foi paga?");
        let _ = writeln!(out, "[pagar] {}", format_price(view.stored_total));
    }

    out
}
