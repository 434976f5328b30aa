use crate::components::RepoSearchView;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="GitHub User Search" />
        <Meta
            name="description"
            content="GitHub User Search - enter a GitHub username to view the repos"
        />
        <main class="flex-grow flex flex-col items-center justify-start pt-8 gap-6">
            <div class="max-w-4xl w-full px-4 text-center">
                <h1 class="text-3xl font-bold mb-4 text-gray-800 dark:text-gray-200">
                    "GitHub User Repo Search"
                </h1>
                <p class="text-gray-600 dark:text-gray-400">
                    "Enter a GitHub username and click the submit button to see a list of that user's repositories."
                </p>
            </div>
            <RepoSearchView />
        </main>
    }
}
