use crate::state::RepoRow;
use leptos::prelude::*;

#[component]
pub fn RepoTable(rows: Vec<RepoRow>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg shadow border border-gray-200 dark:border-gray-700">
            <table class="min-w-full text-left text-sm text-gray-900 dark:text-gray-100">
                <thead class="bg-sky-100 dark:bg-sky-900/40">
                    <tr>
                        <th class="px-4 py-2">"Repo name"</th>
                        <th class="px-4 py-2">"Link"</th>
                        <th class="px-4 py-2">"Language"</th>
                        <th class="px-4 py-2">"Last updated"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.clone()
                        key=|row| row.name.clone()
                        children=move |row| {
                            let href = row.url.clone();
                            view! {
                                <tr class="odd:bg-white even:bg-gray-50 dark:odd:bg-gray-800 dark:even:bg-gray-900 hover:bg-gray-100 dark:hover:bg-gray-700">
                                    <td class="px-4 py-2 font-semibold">{row.name}</td>
                                    <td class="px-4 py-2 break-all">
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="hover:underline text-emerald-600 dark:text-emerald-400"
                                        >
                                            {row.url}
                                        </a>
                                    </td>
                                    <td class="px-4 py-2">{row.language}</td>
                                    <td class="px-4 py-2 whitespace-nowrap">{row.last_updated}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
