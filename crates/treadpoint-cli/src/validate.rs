//! `treadpoint validate` — parse every fixture the way the site would and
//! report what survives.

use treadpoint_core::{AppConfig, CategoriesFile};
use treadpoint_directory::Location;
use treadpoint_pricing::PriceBook;

#[derive(Debug, PartialEq, Eq)]
struct DirectorySummary {
    total: usize,
    with_coordinates: usize,
    callable_phones: usize,
}

fn summarize(locations: &[Location]) -> DirectorySummary {
    DirectorySummary {
        total: locations.len(),
        with_coordinates: locations.iter().filter(|l| l.has_coordinates()).count(),
        callable_phones: locations.iter().filter(|l| !l.phone.tel.is_empty()).count(),
    }
}

fn report_pricing(categories: &CategoriesFile, book: &PriceBook) {
    for category in &categories.categories {
        match book.diameters(&category.slug) {
            Some(diameters) if !diameters.is_empty() => {
                println!(
                    "  {}: диаметры R{}–R{} ({} таблиц)",
                    category.slug,
                    diameters[0],
                    diameters[diameters.len() - 1],
                    diameters.len()
                );
            }
            _ => println!("  {}: нет таблиц в прайс-листе", category.slug),
        }
    }
}

pub(crate) async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let categories = treadpoint_core::load_categories(&config.categories_path)?;
    let locations = treadpoint_store::load_locations(&config.locations_path).await?;

    let summary = summarize(&locations);
    println!("locations: {}", summary.total);
    println!("  с координатами: {}", summary.with_coordinates);
    println!("  с номером для звонка: {}", summary.callable_phones);

    match treadpoint_store::load_price_book(&config.prices_path).await {
        Ok(book) => {
            println!("pricing: {} категорий в реестре", categories.categories.len());
            report_pricing(&categories, &book);
        }
        Err(e) => {
            tracing::error!(error = %e, "прайс-лист не загрузился");
            println!("pricing: недоступен ({e})");
        }
    }

    Ok(())
}
