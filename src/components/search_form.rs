use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Username input plus submit button.
///
/// The form never validates; an empty username is submitted like any other.
#[component]
pub fn SearchForm(
    #[prop(into)] username: Signal<String>,
    on_change: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="w-full max-w-2xl"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label for="username" class="sr-only">
                "GitHub username"
            </label>
            <div class="flex items-center rounded-full border border-gray-300 dark:border-gray-700 shadow-lg overflow-hidden bg-white dark:bg-gray-800">
                <input
                    type="text"
                    id="username"
                    placeholder="Username"
                    autocomplete="off"
                    class="w-full px-8 py-4 bg-transparent focus:outline-none text-gray-900 dark:text-gray-100 placeholder-gray-500 dark:placeholder-gray-400"
                    prop:value=move || username.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-4 font-semibold text-white bg-blue-600 hover:bg-blue-700 transition-colors duration-200"
                >
                    "Submit"
                </button>
            </div>
        </form>
    }
}
