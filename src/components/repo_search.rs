use crate::components::{RepoTable, SearchForm};
use crate::services::GithubClient;
use crate::state::{SearchState, SearchView};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The whole search surface: the form and whatever the results region currently shows.
#[component]
pub fn RepoSearchView() -> impl IntoView {
    let state = RwSignal::new(SearchState::new());
    let client = StoredValue::new(GithubClient::new());

    let username = Signal::derive(move || state.with(|s| s.username_input().to_string()));
    let on_change = Callback::new(move |value: String| {
        state.update(|s| s.set_username_input(value));
    });

    let on_submit = Callback::new(move |_: ()| {
        let Some(submission) = state.try_update(|s| s.submit()) else {
            return;
        };
        let client = client.get_value();

        spawn_local(async move {
            let outcome = client.fetch_user_repos(submission.username()).await;

            // The view may have been unmounted while the request was out.
            state.try_update(|s| s.resolve(&submission, outcome));
        });
    });

    let current_view = Memo::new(move |_| state.with(SearchState::view));

    view! {
        <div class="w-full max-w-4xl px-4 flex flex-col items-center gap-8">
            <SearchForm username on_change on_submit />
            <section class="w-full">
                {move || view! { <SearchResults results=current_view.get() /> }}
            </section>
        </div>
    }
}

/// Renders one state of the results region.
#[component]
pub fn SearchResults(results: SearchView) -> impl IntoView {
    match results {
        SearchView::Error => {
            view! {
                <Notice error=true>
                    "Something went wrong, please check the username and try again"
                </Notice>
            }
                .into_any()
        }
        SearchView::Loading => view! { <Notice>"Loading"</Notice> }.into_any(),
        SearchView::Prompt => {
            view! { <Notice>"Enter a GitHub username above to list its repositories."</Notice> }
                .into_any()
        }
        SearchView::Empty { username } => {
            view! { <Notice>{format!("No repositories found for {username}")}</Notice> }
                .into_any()
        }
        SearchView::Table(rows) => view! { <RepoTable rows /> }.into_any(),
    }
}

#[component]
fn Notice(#[prop(optional)] error: bool, children: Children) -> impl IntoView {
    let class = if error {
        "text-center py-4 text-red-500"
    } else {
        "text-center py-4 text-gray-600 dark:text-gray-400"
    };

    view! {
        <div class=class role="status">
            {children()}
        </div>
    }
}
