//! Create, update and notify dialogs for the administration page.

use leptos::prelude::*;

use crate::net::types::{CreateUserRequest, Role, UpdateUserRequest, UserRecord};
#[cfg(feature = "hydrate")]
use crate::util::settle::settle_dialog;
use crate::util::validation::{UserForm, validate_create_user, validate_notify_message, validate_update_user};

/// Which account the user dialog is editing, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserDialogMode {
    Create,
    Edit(UserRecord),
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum UserSave {
    Create(CreateUserRequest),
    Update(i64, UpdateUserRequest),
}

/// Account form. In `Edit` mode the password row is hidden and the update
/// endpoint is used.
#[component]
pub fn UserDialog(mode: UserDialogMode, on_close: Callback<()>, on_saved: Callback<String>) -> impl IntoView {
    let (editing, title, initial) = match &mode {
        UserDialogMode::Create => (None, "New user".to_owned(), UserForm::default()),
        UserDialogMode::Edit(user) => (Some(user.user_id), format!("Edit {}", user.name), UserForm::from_record(user)),
    };
    let form = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = form.get();
        let checked = match editing {
            None => validate_create_user(&current).map(UserSave::Create),
            Some(user_id) => validate_update_user(&current).map(|request| UserSave::Update(user_id, request)),
        };
        let save = match checked {
            Ok(save) => save,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match save {
                UserSave::Create(request) => crate::net::api::create_user(&request).await.map(|()| "User created."),
                UserSave::Update(user_id, request) => {
                    crate::net::api::update_user(user_id, &request).await.map(|()| "User updated.")
                }
            };
            settle_dialog(outcome.map(str::to_owned), on_saved, error, busy);
        });
    };

    let text_row = move |label: &'static str, kind: &'static str, get: fn(&UserForm) -> String, set: fn(&mut UserForm, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2 class="dialog__title">{title}</h2>
                {text_row("Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {text_row("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {text_row("Address", "text", |f| f.address.clone(), |f, v| f.address = v)}
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.role.as_str())
                        on:change=move |ev| {
                            if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                form.update(|f| f.role = role);
                            }
                        }
                    >
                        <option value="USER">"User"</option>
                        <option value="ADMIN">"Admin"</option>
                    </select>
                </label>
                {editing
                    .is_none()
                    .then(|| text_row("Password", "password", |f| f.password.clone(), |f, v| f.password = v))}
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Send a free-text notification to one account.
#[component]
pub fn NotifyDialog(user: UserRecord, on_close: Callback<()>, on_sent: Callback<String>) -> impl IntoView {
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let user_id = user.user_id;
    let title = format!("Notify {}", user.name);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let text = match validate_notify_message(&message.get()) {
            Ok(text) => text,
            Err(reason) => {
                error.set(Some(reason.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::NotifyUserRequest { message: text };
            let result = crate::net::api::notify_user(user_id, &request).await;
            settle_dialog(result.map(|()| "Notification sent.".to_owned()), on_sent, error, busy);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2 class="dialog__title">{title}</h2>
                <label class="dialog__label">
                    "Message"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Send"
                    </button>
                </div>
            </form>
        </div>
    }
}
