/// A catalog product as served by the remote store API.
///
/// `category` holds the raw category id on arrival; the catalog resolver
/// rewrites it to the category display name before anything user-facing
/// sees it.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub deleted: bool,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub deleted: bool,
}
