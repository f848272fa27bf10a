use tabled::builder::Builder;
use tabled::settings::Style;

use business::domain::catalog::use_cases::browse::CatalogView;

use super::format::format_price;

const EMPTY_STATE: &str = "Vázio\nNada por aqui..";

/// Renders the storefront catalog as a table; an unresolved or empty
/// catalog renders the quiescent empty state.
pub fn render(view: &CatalogView) -> String {
    if view.products.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Produto", "Categoria", "Preço", "Estoque"]);

    for product in &view.products {
        builder.push_record([
            product.name.clone(),
            product.category.clone(),
            format_price(product.price),
            product.quantity.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
