use leptos::prelude::*;
use leptos::tachys::dom::event_target_checked;
use leptos_darkmode::Darkmode;

#[component]
pub fn Header() -> impl IntoView {
    let mut darkmode = use_context::<Darkmode>();

    view! {
        <header class="navbar flex justify-between w-full shadow-md border-b border-slate-200/70 dark:border-slate-800/70 bg-white/90 dark:bg-slate-950/80 text-slate-900 dark:text-white backdrop-blur">
            <div class="flex-none items-center mx-auto p-4">
                <a href="/" class="text-xl font-semibold whitespace-nowrap text-slate-900 dark:text-white">
                    "Repo Search"
                </a>
            </div>
            <div class="flex-1" />
            <div class="flex-none p-4 text-slate-600 dark:text-white">
                <label class="cursor-pointer flex items-center gap-2">
                    <span class="text-sm text-slate-700 dark:text-slate-200">"Dark Mode"</span>
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        prop:checked={
                            let darkmode = darkmode.clone();
                            move || darkmode.clone().map(|v| v.get()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let val = event_target_checked(&ev);
                            if let Some(darkmode) = darkmode.as_mut() {
                                darkmode.set(val);
                            }
                        }
                    />
                </label>
            </div>
        </header>
    }
}
