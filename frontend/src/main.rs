mod components;
mod hooks;
mod services;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use components::RecordForm;
use hooks::{use_categories, use_record_form};
use services::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let categories = use_categories(&api_client);
    let form = use_record_form(&api_client, &categories.categories);

    let on_description_change = {
        let set_description = form.actions.set_description.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                set_description.emit(input.value());
            }
        })
    };

    let on_amount_change = {
        let set_amount = form.actions.set_amount.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                set_amount.emit(input.value());
            }
        })
    };

    let on_category_change = {
        let set_category = form.actions.set_category.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(id) = select.value().parse::<i64>() {
                    set_category.emit(id);
                }
            }
        })
    };

    html! {
        <div class="expensy-app">
            <header class="app-header">
                <h1>{"$ Expensy"}</h1>
                <p class="app-subtitle">{"Track your expenses and income"}</p>
            </header>

            <main>
                <RecordForm
                    description={form.state.description.clone()}
                    amount={form.state.amount_input.clone()}
                    record_type={form.state.record_type}
                    categories={categories.categories.clone()}
                    category_id={form.state.category_id}
                    selected_date={form.state.date.clone()}
                    submitting={form.state.is_submitting}
                    loading_categories={categories.loading}
                    error_message={form.state.error_message.clone()}
                    success_message={form.state.success_message.clone()}
                    on_description_change={on_description_change}
                    on_amount_change={on_amount_change}
                    on_type_change={form.actions.set_record_type.clone()}
                    on_category_change={on_category_change}
                    on_date_change={form.actions.set_date.clone()}
                    on_submit={form.actions.submit.clone()}
                    on_clear={form.actions.clear.clone()}
                />
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
