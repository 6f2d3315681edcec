//! Static catalog content seeded into the shop database.

use menu::{Category, MenuItem, SpecialProduct};

/// Collection holding flavor categories.
pub const MENU_ITEMS_COLLECTION: &str = "menuitems";

/// Collection holding special dessert products.
pub const SPECIAL_PRODUCTS_COLLECTION: &str = "specialproducts";

/// Field the special products collection keeps unique.
pub const PRODUCT_KEY_FIELD: &str = "name";

/// Name of the premium flavor category.
pub const SABORES_ESPECIAIS_PLUS: &str = "Sabores Especiais +";

/// The "Sabores Especiais +" category with its eleven flavors.
pub fn sabores_especiais_plus() -> Category {
    Category {
        category: SABORES_ESPECIAIS_PLUS.to_string(),
        price: 10.0,
        items: vec![
            MenuItem::new("Açaí", "Sorvete sabor açaí, sem lactose."),
            MenuItem::new("Ameixa", "Sorvete sabor ameixa, doce e frutado."),
            MenuItem::new(
                "Camafeu",
                "Sorvete sabor doce de nozes com leite condensado.",
            ),
            MenuItem::new("Casadinho", "Sorvete sabor tradicional casadinho."),
            MenuItem::new(
                "Casadinho com Leite Ninho e Nutella",
                "Sorvete casadinho com leite Ninho e creme de avelã.",
            ),
            MenuItem::new(
                "Casadinho com Leite Ninho e Trufa",
                "Sorvete casadinho com leite Ninho e recheio de trufa.",
            ),
            MenuItem::new(
                "Extra Dark",
                "Sorvete sabor chocolate extra amargo, intenso e sofisticado.",
            ),
            MenuItem::new(
                "Ferrero Rocher",
                "Sorvete inspirado no famoso bombom Ferrero Rocher.",
            ),
            MenuItem::new(
                "Mil Amores",
                "Sorvete clássico com um toque especial de amor.",
            ),
            MenuItem::new("Nutella", "Sorvete sabor creme de avelã com cacau."),
            MenuItem::new(
                "Nutella Branca",
                "Sorvete sabor creme de avelã branco, suave e delicioso.",
            ),
        ],
    }
}

/// Desserts sold alongside the flavor menu.
///
/// The cake is sold by size; its base price is the smallest size.
pub fn special_products() -> Vec<SpecialProduct> {
    vec![
        SpecialProduct::new("Bolo", 10.0)
            .with_size("mini", 10.0)
            .with_size("pequeno", 12.0)
            .with_size("medio", 15.0)
            .with_size("grande", 20.0),
        SpecialProduct::new("Brownie", 5.0),
        SpecialProduct::new("Petit Gateau", 25.0),
        SpecialProduct::new("Diversos", 0.0),
    ]
}
