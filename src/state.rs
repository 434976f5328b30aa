use std::cmp::Reverse;

use crate::models::Repository;
use crate::services::FetchOutcome;
use crate::utils::time::{format_long_date, parse_timestamp};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    Loading,
    Error,
    Success,
}

/// Ticket handed out by [`SearchState::submit`] and redeemed by [`SearchState::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    generation: u64,
    username: String,
}

impl Submission {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What the results region should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    Error,
    Loading,
    Prompt,
    Empty { username: String },
    Table(Vec<RepoRow>),
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRow {
    pub name: String,
    pub url: String,
    pub language: String,
    pub last_updated: String,
}

impl From<&Repository> for RepoRow {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            language: repo.language.clone().unwrap_or_default(),
            last_updated: format_long_date(&repo.updated_at),
        }
    }
}

/// All state owned by the search page.
///
/// Fields change only through [`set_username_input`](Self::set_username_input),
/// [`submit`](Self::submit) and [`resolve`](Self::resolve). `results` is only
/// replaced when the latest submission completes, so an in-flight request never
/// disturbs what is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    username_input: String,
    submitted_username: String,
    results: Vec<Repository>,
    status: FetchStatus,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username_input(&self) -> &str {
        &self.username_input
    }

    pub fn submitted_username(&self) -> &str {
        &self.submitted_username
    }

    pub fn results(&self) -> &[Repository] {
        &self.results
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn set_username_input(&mut self, value: impl Into<String>) {
        self.username_input = value.into();
    }

    /// Records the current input as the submitted username and moves to `Loading`.
    ///
    /// Every call supersedes the previous submission, whether or not it has completed.
    pub fn submit(&mut self) -> Submission {
        self.generation += 1;
        self.submitted_username = self.username_input.clone();
        self.status = FetchStatus::Loading;

        tracing::info!(
            username = %self.submitted_username,
            generation = self.generation,
            "submitting repository search"
        );

        Submission {
            generation: self.generation,
            username: self.submitted_username.clone(),
        }
    }

    /// Applies the outcome of `submission`'s request.
    ///
    /// Returns `false`, leaving the state untouched, when a newer submission has
    /// been made since.
    pub fn resolve(&mut self, submission: &Submission, outcome: FetchOutcome) -> bool {
        if submission.generation != self.generation {
            tracing::debug!(
                username = %submission.username,
                generation = submission.generation,
                current = self.generation,
                "discarding stale repository response"
            );
            return false;
        }

        match outcome {
            Ok(repos) => {
                tracing::info!(
                    username = %submission.username,
                    count = repos.len(),
                    "repository search succeeded"
                );
                self.results = repos;
                self.status = FetchStatus::Success;
            }
            Err(failure) => {
                tracing::warn!(
                    username = %submission.username,
                    error = %failure,
                    "repository search failed"
                );
                self.results.clear();
                self.status = FetchStatus::Error;
            }
        }
        true
    }

    pub fn sorted_results(&self) -> Vec<Repository> {
        sort_by_updated(self.results.clone())
    }

    /// Picks what to render; the first matching rule wins.
    pub fn view(&self) -> SearchView {
        match self.status {
            FetchStatus::Error => return SearchView::Error,
            FetchStatus::Loading => return SearchView::Loading,
            FetchStatus::Idle | FetchStatus::Success => {}
        }

        if self.submitted_username.is_empty() {
            return SearchView::Prompt;
        }

        let sorted = self.sorted_results();
        if sorted.is_empty() {
            return SearchView::Empty {
                username: self.submitted_username.clone(),
            };
        }

        SearchView::Table(sorted.iter().map(RepoRow::from).collect())
    }
}

/// Stable sort, most recently updated first.
///
/// Repositories whose timestamp does not parse go last, in their original order.
pub fn sort_by_updated(mut repos: Vec<Repository>) -> Vec<Repository> {
    repos.sort_by_key(|repo| Reverse(parse_timestamp(&repo.updated_at)));
    repos
}
