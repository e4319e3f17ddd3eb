use gloo::timers::future::TimeoutFuture;
use shared::{Category, RecordFormService, RecordFormState, RecordType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseRecordFormResult {
    pub state: RecordFormState,
    pub actions: UseRecordFormActions,
}

#[derive(Clone)]
pub struct UseRecordFormActions {
    pub set_description: Callback<String>,
    pub set_amount: Callback<String>,
    pub set_record_type: Callback<RecordType>,
    pub set_date: Callback<Option<String>>,
    pub set_category: Callback<i64>,
    pub submit: Callback<()>,
    pub clear: Callback<()>,
}

/// Hook owning the record form state and the validation-then-submit flow.
///
/// Submission validates synchronously first; invalid input surfaces the first
/// failing check's message and never reaches the network. The POST itself
/// runs off the UI thread via `spawn_local`; if the form is gone by the time
/// the response arrives, the state write is simply never rendered.
#[hook]
pub fn use_record_form(api_client: &ApiClient, categories: &[Category]) -> UseRecordFormResult {
    let service = RecordFormService::new();
    let form = use_state(|| RecordFormService::new().create_form_state());

    let set_description = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(RecordFormState {
                description: value,
                error_message: None,
                ..(*form).clone()
            });
        })
    };

    let set_amount = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(RecordFormState {
                amount_input: value,
                error_message: None,
                ..(*form).clone()
            });
        })
    };

    let set_record_type = {
        let form = form.clone();
        Callback::from(move |record_type: RecordType| {
            form.set(RecordFormState {
                record_type,
                ..(*form).clone()
            });
        })
    };

    let set_date = {
        let form = form.clone();
        Callback::from(move |date: Option<String>| {
            form.set(RecordFormState {
                date,
                ..(*form).clone()
            });
        })
    };

    let set_category = {
        let form = form.clone();
        Callback::from(move |category_id: i64| {
            form.set(RecordFormState {
                category_id: Some(category_id),
                ..(*form).clone()
            });
        })
    };

    let clear = {
        let form = form.clone();
        let service = service.clone();
        Callback::from(move |_| {
            form.set(service.create_form_state());
        })
    };

    let submit = {
        let form = form.clone();
        let service = service.clone();
        let api_client = api_client.clone();
        let categories = categories.to_vec();
        Callback::from(move |_| {
            let state = (*form).clone();
            if state.is_submitting {
                return;
            }

            let validation = service.validate(&state.description, &state.amount_input);
            if !validation.is_valid {
                // First failing check aborts the submission; no network call.
                form.set(RecordFormState {
                    error_message: service.first_error_message(&validation),
                    success_message: None,
                    ..state
                });
                return;
            }

            let amount = match validation.cleaned_amount {
                Some(amount) => amount,
                None => return,
            };
            let category_id = state
                .category_id
                .or_else(|| categories.first().map(|c| c.id))
                .unwrap_or(1);
            let request =
                service.build_request(&state.description, amount, state.date.as_deref(), category_id);

            form.set(RecordFormState {
                is_submitting: true,
                error_message: None,
                success_message: None,
                ..state
            });

            let form = form.clone();
            let service = service.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.create_record(request.clone()).await {
                    Ok(_) => {
                        let mut next = service.reset_form(&form);
                        next.success_message = Some(service.success_message(&request));
                        form.set(next);

                        // Let the confirmation banner fade after a few seconds.
                        let form = form.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(3_000).await;
                            form.set(RecordFormState {
                                success_message: None,
                                ..(*form).clone()
                            });
                        });
                    }
                    Err(e) => {
                        // The form keeps its contents so the user can retry.
                        form.set(RecordFormState {
                            is_submitting: false,
                            error_message: Some(format!("Failed to save record: {e}")),
                            ..(*form).clone()
                        });
                    }
                }
            });
        })
    };

    UseRecordFormResult {
        state: (*form).clone(),
        actions: UseRecordFormActions {
            set_description,
            set_amount,
            set_record_type,
            set_date,
            set_category,
            submit,
            clear,
        },
    }
}
