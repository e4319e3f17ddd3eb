use shared::{Category, RecordType};
use yew::prelude::*;

use crate::components::date_picker::DatePicker;

#[derive(Properties, PartialEq)]
pub struct RecordFormProps {
    // Form state
    pub description: String,
    pub amount: String,
    pub record_type: RecordType,
    pub categories: Vec<Category>,
    pub category_id: Option<i64>,
    pub selected_date: Option<String>,
    pub submitting: bool,
    pub loading_categories: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Event handlers
    pub on_description_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_type_change: Callback<RecordType>,
    pub on_category_change: Callback<Event>,
    pub on_date_change: Callback<Option<String>>,
    pub on_submit: Callback<()>,
    pub on_clear: Callback<()>,
}

/// The single record entry screen: description, expense/income toggle,
/// amount, date, category, save and clear.
#[function_component(RecordForm)]
pub fn record_form(props: &RecordFormProps) -> Html {
    let selected_category_id = props
        .category_id
        .or_else(|| props.categories.first().map(|c| c.id));

    let type_button = |record_type: RecordType, class: &'static str| -> Html {
        let on_type_change = props.on_type_change.clone();
        let selected = props.record_type == record_type;
        html! {
            <button
                type="button"
                class={classes!("toggle-button", class, selected.then_some("selected"))}
                disabled={props.submitting}
                onclick={Callback::from(move |_: MouseEvent| on_type_change.emit(record_type))}
            >
                {record_type.label()}
            </button>
        }
    };

    html! {
        <section class="record-form-section">
            {if let Some(error) = props.error_message.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if let Some(success) = props.success_message.as_ref() {
                html! {
                    <div class="form-message success">
                        {success}
                    </div>
                }
            } else { html! {} }}

            <form class="record-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <input
                        type="text"
                        id="description"
                        placeholder="Describe the expense or income"
                        value={props.description.clone()}
                        onchange={props.on_description_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label>{"Type"}</label>
                    <div class="type-toggle">
                        {type_button(RecordType::Expense, "expense")}
                        {type_button(RecordType::Income, "income")}
                    </div>
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        value={props.amount.clone()}
                        onchange={props.on_amount_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label>{"Date"}</label>
                    <DatePicker
                        selected_date={props.selected_date.clone()}
                        on_date_change={props.on_date_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        onchange={props.on_category_change.clone()}
                        disabled={props.submitting || props.loading_categories}
                    >
                        {for props.categories.iter().map(|category| {
                            html! {
                                <option
                                    value={category.id.to_string()}
                                    selected={Some(category.id) == selected_category_id}
                                >
                                    {&category.name}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <div class="form-buttons">
                    <button
                        type="submit"
                        class="btn btn-primary save-button"
                        disabled={props.submitting}
                    >
                        {if props.submitting { "Saving..." } else { "Save record" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary clear-button"
                        disabled={props.submitting}
                        onclick={
                            let on_clear = props.on_clear.clone();
                            Callback::from(move |_: MouseEvent| on_clear.emit(()))
                        }
                    >
                        {"Clear"}
                    </button>
                </div>
            </form>
        </section>
    }
}
