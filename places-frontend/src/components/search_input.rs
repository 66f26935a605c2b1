use leptos::{ev, *};

use places_frontend_api::{submission, Submission};

#[component]
pub fn SearchInput(
    #[prop(into)] loading: Signal<bool>,
    on_search: Callback<String>,
    on_empty: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // At most one search is pending.
        match text.with_untracked(|text| submission(loading.get_untracked(), text)) {
            Submission::Search(query) => on_search.call(query),
            Submission::EmptyQuery => on_empty.call(()),
            Submission::Ignored => log::debug!("Search is pending: ignore submission"),
        }
    };

    view! {
      <form class="flex gap-2 mb-4" on:submit=submit>
        <input
          type="search"
          class="w-full py-3 px-4 bg-white text-gray-700 outline-none rounded border border-gray-300"
          placeholder="e.g. 24h cafe in Depok"
          prop:value = move || text.get()
          prop:disabled = move || loading.get()
          on:input = move |ev| set_text.set(event_target_value(&ev))
        />
        <button
          type="submit"
          class="px-6 py-2.5 font-medium text-sm rounded shadow-md bg-blue-600 text-white disabled:opacity-50"
          prop:disabled = move || loading.get()
        >
          { move || if loading.get() { "Searching..." } else { "Search" } }
        </button>
      </form>
    }
}
