//! Username dropdown bound to the fixed user list.

use leptos::*;
use web_sys::Event;

use crate::components::FormSignal;
use crate::USER_LIST;

#[component]
pub fn UserSelect(form: FormSignal) -> impl IntoView {
    let warning = move || form.with(|f| f.warning_visible());

    let on_change = move |ev: Event| {
        let name = event_target_value(&ev);
        log::debug!("👤 User selected: {:?}", name);
        form.update(|f| f.select_user(name));
    };

    view! {
        <div class="user-select">
            <label for="userSelect" class="field-label">
                "Select User " <span class="required">"*"</span>
            </label>
            <select
                id="userSelect"
                class="user-select-input"
                class:invalid=warning
                prop:value=move || form.with(|f| f.selected_user().to_string())
                on:change=on_change
            >
                <option value="">"-- Select a user --"</option>
                {USER_LIST
                    .iter()
                    .map(|user| view! { <option value=user.name>{user.name}</option> })
                    .collect_view()}
            </select>

            <Show
                when=warning
                fallback=|| view! { }
            >
                <p class="field-error">"This field is required"</p>
            </Show>
        </div>
    }
}
