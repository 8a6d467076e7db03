//! User administration page, reachable by admins only.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice_banner::NoticeBanner;
use crate::components::pager::Pager;
use crate::components::user_dialogs::{NotifyDialog, UserDialog, UserDialogMode};
use crate::net::types::UserRecord;
use crate::state::auth::use_session;
use crate::util::format::format_optional_timestamp;
use crate::util::listing::{PAGE_SIZE, filter_users, page_slice};
use crate::util::notice::{Notice, flash};

#[derive(Clone, Debug, PartialEq, Eq)]
enum UserAction {
    Edit(UserDialogMode),
    Notify(UserRecord),
    Delete(UserRecord),
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_session();
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);
    let action = RwSignal::new(None::<UserAction>);
    let notice = RwSignal::new(None::<Notice>);

    let reload = move || {
        loading.try_set(true);
        load_error.try_set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Ok(list) => {
                    users.try_set(list);
                }
                Err(e) => {
                    load_error.try_set(Some(e.user_message()));
                }
            }
            loading.try_set(false);
        });
    };

    // Re-runs when the role changes, e.g. after a restore completes.
    Effect::new(move || {
        if session.is_admin() {
            reload();
        }
    });

    let filtered = Memo::new(move |_| filter_users(&users.get(), &search.get()));
    let rows = move || page_slice(&filtered.get(), page.get(), PAGE_SIZE);

    let close = Callback::new(move |()| action.set(None));
    let on_done = Callback::new(move |message: String| {
        action.set(None);
        flash(notice, Notice::success(message));
        reload();
    });
    let on_sent = Callback::new(move |message: String| {
        action.set(None);
        flash(notice, Notice::success(message));
    });
    let on_delete = Callback::new(move |()| {
        let Some(UserAction::Delete(user)) = action.get_untracked() else {
            return;
        };
        action.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(user.user_id).await {
                Ok(()) => {
                    on_done.try_run("User deleted.".to_owned());
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(e.user_message())));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user;
    });

    let table_row = move |user: UserRecord| {
        let for_edit = user.clone();
        let for_notify = user.clone();
        let for_delete = user.clone();
        view! {
            <tr class="table__row">
                <td>{user.user_id}</td>
                <td>{user.name}</td>
                <td>{user.email}</td>
                <td>{user.address}</td>
                <td>{user.role.as_str()}</td>
                <td>{format_optional_timestamp(user.created_at.as_deref())}</td>
                <td class="table__actions">
                    <button
                        class="btn"
                        on:click=move |_| action.set(Some(UserAction::Edit(UserDialogMode::Edit(for_edit.clone()))))
                    >
                        "Edit"
                    </button>
                    <button class="btn" on:click=move |_| action.set(Some(UserAction::Notify(for_notify.clone())))>
                        "Notify"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| action.set(Some(UserAction::Delete(for_delete.clone())))
                    >
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <section class="admin-page">
            <div class="page__header">
                <h1 class="page__title">"Users"</h1>
                <input
                    class="form__input page__search"
                    type="search"
                    placeholder="Search by name, email or role"
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <button
                    class="btn btn--primary"
                    on:click=move |_| action.set(Some(UserAction::Edit(UserDialogMode::Create)))
                >
                    "New user"
                </button>
            </div>

            <NoticeBanner notice=notice/>
            <Show when=move || load_error.get().is_some()>
                <p class="form-error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Address"</th>
                        <th>"Role"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows().into_iter().map(table_row).collect_view()}
                </tbody>
            </table>
            <Show when=move || !loading.get() && filtered.with(Vec::is_empty)>
                <p class="table__empty">"No users match."</p>
            </Show>
            <Pager page=page total=Signal::derive(move || filtered.with(Vec::len))/>

            {move || {
                action
                    .get()
                    .map(|current| match current {
                        UserAction::Edit(mode) => {
                            view! { <UserDialog mode=mode on_close=close on_saved=on_done/> }.into_any()
                        }
                        UserAction::Notify(user) => {
                            view! { <NotifyDialog user=user on_close=close on_sent=on_sent/> }.into_any()
                        }
                        UserAction::Delete(user) => {
                            view! {
                                <ConfirmDialog
                                    title="Delete user"
                                    message=format!("Delete {} ({})?", user.name, user.email)
                                    on_cancel=close
                                    on_confirm=on_delete
                                />
                            }
                                .into_any()
                        }
                    })
            }}
        </section>
    }
}
