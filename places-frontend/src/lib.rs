use leptos::*;
use web_sys::AbortController;

use places_boundary::SearchRequest;
use places_frontend_api::{Error, PublicApi, Resolution, SearchSession};

mod components;
use components::*;

const DEFAULT_API_URL: &str = "/api";

#[component]
pub fn App() -> impl IntoView {
    let public_api = PublicApi::new(DEFAULT_API_URL.to_string());

    // -- signals -- //

    let session = create_rw_signal(SearchSession::default());
    let in_flight = store_value(None::<AbortController>);

    let loading = Signal::derive(move || session.with(SearchSession::is_loading));
    let cards = Signal::derive(move || session.with(SearchSession::cards));
    let notice = Signal::derive(move || session.with(|s| s.notice().cloned()));

    // -- actions -- //

    let search = create_action(move |query: &String| {
        let api = public_api.clone();
        let req = SearchRequest::new(query.clone());

        // Abort the superseded request
        if let Some(previous) = in_flight.get_value() {
            previous.abort();
        }
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(AbortController::signal);
        in_flight.set_value(controller);

        let ticket = session.try_update(SearchSession::begin);
        async move {
            let Some(ticket) = ticket else {
                return;
            };
            log::debug!("Dispatch search request {ticket:?}");
            let result = api.search(&req, signal.as_ref()).await;
            match &result {
                Err(Error::Aborted) | Ok(_) => {}
                Err(err) => log::warn!("Search failed: {err}"),
            }
            if session.try_update(|s| s.resolve(ticket, result)) == Some(Resolution::Stale) {
                log::debug!("Discard stale response of {ticket:?}");
            }
        }
    });

    // -- callbacks -- //

    let on_search = Callback::new(move |query: String| {
        search.dispatch(query);
    });
    let on_empty = Callback::new(move |()| {
        session.update(SearchSession::warn_empty_query);
    });
    let on_dismiss = Callback::new(move |()| {
        session.update(SearchSession::dismiss_notice);
    });

    view! {
      <main class="container max-w-3xl p-6 mx-auto">
        <h1 class="text-2xl font-semibold mb-4">"Places Finder"</h1>
        <SearchInput loading on_search on_empty />
        <StatusNotice notice on_dismiss />
        <Show
          when = move || !cards.with(Vec::is_empty) || loading.get()
          fallback = || view! { <Placeholder /> }
        >
          // Cards are identified by their position only,
          // so every new result list is rendered from scratch.
          <ul class="grid gap-4">
            { move || cards.get().into_iter().map(|card| view! {
                <li><PlaceCard card /></li>
              }).collect_view()
            }
          </ul>
        </Show>
      </main>
    }
}
