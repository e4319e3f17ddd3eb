use shared::{fallback_categories, Category};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseCategoriesResult {
    pub categories: Vec<Category>,
    pub loading: bool,
}

/// Load the category list from the service once on mount.
///
/// Any failure is swallowed and replaced by the fixed fallback list so the
/// form stays usable offline; the error only goes to the console.
#[hook]
pub fn use_categories(api_client: &ApiClient) -> UseCategoriesResult {
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);

    {
        let api_client = api_client.clone();
        let categories = categories.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_categories().await {
                    Ok(list) if !list.is_empty() => {
                        categories.set(list);
                    }
                    Ok(_) => {
                        gloo::console::warn!("Categories endpoint returned no entries, using fallback list");
                        categories.set(fallback_categories());
                    }
                    Err(e) => {
                        gloo::console::warn!("Failed to load categories, using fallback list:", e.to_string());
                        categories.set(fallback_categories());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    UseCategoriesResult {
        categories: (*categories).clone(),
        loading: *loading,
    }
}
