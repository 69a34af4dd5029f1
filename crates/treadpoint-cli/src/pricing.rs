//! `treadpoint pricing` — drive the pricing widget the way the page does:
//! activate the category tab, then move the slider to the requested
//! diameter and print whatever the widget says to render.

use anyhow::Context;

use treadpoint_core::AppConfig;
use treadpoint_pricing::{PricingWidget, TableRender};

pub(crate) async fn run(
    config: &AppConfig,
    category: &str,
    diameter: Option<u32>,
) -> anyhow::Result<()> {
    let categories = treadpoint_core::load_categories(&config.categories_path)?;
    let book = treadpoint_store::load_price_book(&config.prices_path).await?;

    let mut widget = PricingWidget::new(
        categories
            .categories
            .iter()
            .map(|c| (c.slug.clone(), c.default_diameter)),
    );

    let mut render = widget
        .activate_category(&book, category)
        .with_context(|| format!("category '{category}' has no price tables"))?;

    if let Some(requested) = diameter {
        if let Some(update) = widget.select(&book, category, requested)? {
            render = Some(update);
        }
    }

    match render {
        Some(table) => print_table(&table),
        // Possible only when the same effective table was already rendered,
        // which a fresh widget never has.
        None => println!("таблица не изменилась"),
    }

    Ok(())
}

fn print_table(table: &TableRender) {
    println!(
        "{} R{} (доступно R{}–R{})",
        table.category, table.diameter, table.slider_min, table.slider_max
    );
    println!("{}", table.columns.join(" | "));
    for row in &table.rows {
        println!("{}", row.join(" | "));
    }
}
