//! # Storefront Smoke Client
//!
//! Loads the shop front the way the home page does (categories, then every
//! listed product) and logs what came back.

use std::process::ExitCode;
use std::sync::Arc;

use shared::{Category, Product};
use storefront::config::ClientConfig;
use storefront::services::api::{category, product, ApiClient};
use storefront::ui::LoadingIndicator;

#[tokio::main]
async fn main() -> ExitCode {
    storefront::debug::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Storefront smoke run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> storefront::Result<()> {
    let config = ClientConfig::from_env()?;
    let loading = Arc::new(LoadingIndicator::headless());
    let api = ApiClient::new(&config, loading)?;

    tracing::info!(base_url = %api.base_url(), "Loading shop front");

    let categories = category::get_categories(&api).await?;
    if categories.success {
        let categories: Vec<Category> = categories.data_as()?;
        tracing::info!(count = categories.len(), "Categories loaded");
        for category in &categories {
            tracing::debug!(id = category.id, name = %category.name, "Category");
        }
    } else {
        tracing::warn!(code = ?categories.code, reason = ?categories.message_text(), "Category listing rejected");
    }

    let products = product::get_products_by_category(&api, None).await?;
    if products.success {
        let products: Vec<Product> = products.data_as()?;
        let in_stock = products.iter().filter(|p| p.stock > 0).count();
        tracing::info!(count = products.len(), in_stock, "Products loaded");
    } else {
        tracing::warn!(code = ?products.code, reason = ?products.message_text(), "Product listing rejected");
    }

    Ok(())
}
